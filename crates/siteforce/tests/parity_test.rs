//! Bit-for-bit agreement with an independent implementation of the same formulas that works on
//! raw degree values and epsilon comparisons instead of `Rotation`.

use siteforce::{
    BuildingWrapper, ClusterPosition, ClusterShape, Footprint, OffsetRules, Position,
    ReductionOptions, Rotation, building_clearance, cluster_clearance,
    normalized_cluster_clearance_with_options,
};
use uuid::Uuid;

struct XorShift64Star(u64);

impl XorShift64Star {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn int_in(&mut self, lo: u64, hi: u64) -> f64 {
        (lo + self.next_u64() % (hi - lo + 1)) as f64
    }

    fn angle(&mut self) -> f64 {
        [0.0, 90.0, 180.0, 270.0][(self.next_u64() % 4) as usize]
    }
}

#[derive(Clone, Copy)]
struct RawRect {
    width_m: f64,
    length_m: f64,
    x: f64,
    y: f64,
    angle_deg: f64,
}

fn reference_half_totals(first: RawRect, second: RawRect) -> (f64, f64) {
    let mut first_length = first.length_m / 2.0;
    let mut first_width = first.width_m / 2.0;
    if (first.angle_deg % 180.0 - 90.0).abs() < 1e-5 {
        std::mem::swap(&mut first_length, &mut first_width);
    }
    let mut second_length = second.length_m / 2.0;
    let mut second_width = second.width_m / 2.0;
    if (second.angle_deg % 180.0 - 90.0).abs() < 1e-5 {
        std::mem::swap(&mut second_length, &mut second_width);
    }
    (first_width + second_width, first_length + second_length)
}

fn reference_clearance(first: RawRect, second: RawRect) -> f64 {
    let delta_x = (first.x - second.x).abs();
    let delta_y = (first.y - second.y).abs();
    let (total_half_width, total_half_length) = reference_half_totals(first, second);
    if delta_x < total_half_length && delta_y >= total_half_width {
        delta_y - total_half_width
    } else if delta_x >= total_half_length && delta_y < total_half_width {
        delta_x - total_half_length
    } else if delta_x >= total_half_length && delta_y >= total_half_width {
        ((delta_x - total_half_length).powi(2) + (delta_y - total_half_width).powi(2)).sqrt()
    } else {
        -1.0
    }
}

fn random_rect(rng: &mut XorShift64Star) -> RawRect {
    RawRect {
        width_m: rng.int_in(5, 100),
        length_m: rng.int_in(5, 100),
        x: rng.int_in(0, 100),
        y: rng.int_in(0, 100),
        angle_deg: rng.angle(),
    }
}

fn typed(r: RawRect) -> (Footprint, Position) {
    (
        Footprint::rectangle(r.width_m, r.length_m),
        Position::from_degrees(Uuid::nil(), r.x, r.y, r.angle_deg).unwrap(),
    )
}

#[test]
fn building_clearance_matches_reference_bit_for_bit() {
    let mut rng = XorShift64Star(0x9E37_79B9_7F4A_7C15);
    let mut overlaps = 0usize;
    for _ in 0..5_000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        let (fa, pa) = typed(a);
        let (fb, pb) = typed(b);

        let expected = reference_clearance(a, b);
        let actual = building_clearance(&fa, &fb, &pa, &pb).as_raw();
        assert_eq!(actual.to_bits(), expected.to_bits(), "a={pa:?} b={pb:?}");
        if expected < 0.0 {
            overlaps += 1;
        }
    }
    // Make sure the sample actually exercises the overlap branch.
    assert!(overlaps > 0);
}

#[test]
fn cluster_clearance_matches_reference_minimum() {
    let mut rng = XorShift64Star(42);
    for _ in 0..200 {
        let cluster_angle = rng.angle();
        let (cx, cy) = (rng.int_in(0, 300), rng.int_in(0, 300));
        let members: Vec<RawRect> = (0..4).map(|_| random_rect(&mut rng)).collect();
        let other = random_rect(&mut rng);

        // Rotate each local offset with the epsilon-checked angle table.
        let mut expected = f64::INFINITY;
        for m in &members {
            let (x, y) = if cluster_angle.abs() < 1e-5 {
                (m.x, m.y)
            } else if (cluster_angle - 90.0).abs() < 1e-5 {
                (m.y, -m.x)
            } else if (cluster_angle - 180.0).abs() < 1e-5 {
                (-m.x, -m.y)
            } else {
                (-m.y, m.x)
            };
            let global = RawRect {
                x: x + cx,
                y: y + cy,
                angle_deg: (m.angle_deg + cluster_angle) % 360.0,
                ..*m
            };
            expected = expected.min(reference_clearance(global, other));
        }

        let shape = ClusterShape::new(
            Uuid::from_u128(1),
            Default::default(),
            Footprint::default(),
            members
                .iter()
                .map(|m| {
                    let (footprint, position) = typed(*m);
                    BuildingWrapper::new(Uuid::nil(), footprint, position)
                })
                .collect(),
        );
        let (of, op) = typed(other);
        let single = ClusterShape::new(
            Uuid::from_u128(2),
            Default::default(),
            Footprint::default(),
            vec![BuildingWrapper::new(Uuid::nil(), of, op)],
        );

        let actual = cluster_clearance(
            &shape,
            &single,
            &ClusterPosition::from_degrees(Uuid::from_u128(1), cx, cy, cluster_angle).unwrap(),
            &ClusterPosition::new(Uuid::from_u128(2), 0.0, 0.0, Rotation::Rot0),
        )
        .unwrap()
        .as_raw();
        assert_eq!(actual.to_bits(), expected.to_bits());
    }
}

fn reference_place(m: RawRect, cx: f64, cy: f64, cluster_angle: f64) -> RawRect {
    let (x, y) = if cluster_angle.abs() < 1e-5 {
        (m.x, m.y)
    } else if (cluster_angle - 90.0).abs() < 1e-5 {
        (m.y, -m.x)
    } else if (cluster_angle - 180.0).abs() < 1e-5 {
        (-m.x, -m.y)
    } else {
        (-m.y, m.x)
    };
    RawRect {
        x: x + cx,
        y: y + cy,
        angle_deg: (m.angle_deg + cluster_angle) % 360.0,
        ..m
    }
}

fn shape_of(cluster: u128, first_member: u128, members: &[RawRect]) -> ClusterShape {
    ClusterShape::new(
        Uuid::from_u128(cluster),
        Default::default(),
        Footprint::default(),
        members
            .iter()
            .enumerate()
            .map(|(k, m)| {
                let (footprint, position) = typed(*m);
                BuildingWrapper::new(Uuid::from_u128(first_member + k as u128), footprint, position)
            })
            .collect(),
    )
}

#[test]
fn normalized_cluster_clearance_matches_reference() {
    const OFFSETS: [f64; 4] = [4.0, 6.0, 8.0, 10.0];
    let mut rng = XorShift64Star(0xD1B5_4A32_D192_ED03);
    for case in 0..300 {
        let first_angle = Rotation::ALL[case % 4].degrees();
        let second_angle = rng.angle();
        let (ax, ay) = (rng.int_in(0, 300), rng.int_in(0, 300));
        let (bx, by) = (rng.int_in(0, 300), rng.int_in(0, 300));
        let first: Vec<RawRect> = (0..3).map(|_| random_rect(&mut rng)).collect();
        let second: Vec<RawRect> = (0..2).map(|_| random_rect(&mut rng)).collect();

        let mut rules = OffsetRules::new();
        let mut offsets = Vec::new();
        for i in 0..first.len() {
            for j in 0..second.len() {
                let offset_m = OFFSETS[(rng.next_u64() % 4) as usize];
                let (a, b) = (Uuid::from_u128(10 + i as u128), Uuid::from_u128(20 + j as u128));
                rules.insert(a, b, offset_m).unwrap();
                offsets.push(offset_m);
            }
        }

        // Row-major scan; an equal ratio only replaces the best with a smaller offset.
        let mut expected: Option<(f64, f64)> = None;
        for (i, a) in first.iter().enumerate() {
            for (j, b) in second.iter().enumerate() {
                let offset_m = offsets[i * second.len() + j];
                let raw = reference_clearance(
                    reference_place(*a, ax, ay, first_angle),
                    reference_place(*b, bx, by, second_angle),
                );
                let ratio = raw / offset_m;
                let better = match expected {
                    None => true,
                    Some((r, o)) => ratio < r || (ratio == r && offset_m < o),
                };
                if better {
                    expected = Some((ratio, offset_m));
                }
            }
        }
        let (expected_ratio, expected_offset) = expected.unwrap();

        let first_shape = shape_of(1, 10, &first);
        let second_shape = shape_of(2, 20, &second);
        let first_pos =
            ClusterPosition::from_degrees(Uuid::from_u128(1), ax, ay, first_angle).unwrap();
        let second_pos =
            ClusterPosition::from_degrees(Uuid::from_u128(2), bx, by, second_angle).unwrap();
        for opts in [ReductionOptions::sequential(), ReductionOptions::parallel()] {
            let actual = normalized_cluster_clearance_with_options(
                &first_shape,
                &second_shape,
                &first_pos,
                &second_pos,
                &rules,
                &opts,
            )
            .unwrap();
            assert_eq!(actual.ratio.to_bits(), expected_ratio.to_bits(), "case {case}");
            assert_eq!(actual.offset_m.to_bits(), expected_offset.to_bits(), "case {case}");
        }
    }
}
