/// 3点 a, b, c のなす角を度で返す（b が頂点＝関節）
///
/// ベクトル b→c と b→a の符号付き角度差を atan2 で取り、
/// 絶対値を 0〜180 度の範囲に畳む。有限な入力に対して常に定義される。
/// b が端点と一致する縮退入力では atan2 の向きが不定なため
/// 値は任意だが決定的で、エラーにはしない。
pub fn joint_angle(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    let radians = (c[1] - b[1]).atan2(c[0] - b[0]) - (a[1] - b[1]).atan2(a[0] - b[0]);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_right_angle() {
        let angle = joint_angle([1.0, 0.0], [0.0, 0.0], [0.0, 1.0]);
        assert!((angle - 90.0).abs() < EPS, "angle={}", angle);
    }

    #[test]
    fn test_straight_line() {
        let angle = joint_angle([1.0, 0.0], [0.0, 0.0], [-1.0, 0.0]);
        assert!((angle - 180.0).abs() < EPS, "angle={}", angle);
    }

    #[test]
    fn test_zero_angle() {
        let angle = joint_angle([1.0, 0.0], [0.0, 0.0], [2.0, 0.0]);
        assert!(angle.abs() < EPS, "angle={}", angle);
    }

    #[test]
    fn test_reflex_folded() {
        // atan2差は225度になるが、優角は360-225=135度に畳まれる
        let angle = joint_angle([0.0, -1.0], [0.0, 0.0], [-1.0, 1.0]);
        assert!((angle - 135.0).abs() < EPS, "angle={}", angle);
    }

    #[test]
    fn test_endpoint_swap_symmetry() {
        let triples = [
            ([0.3, 0.1], [0.5, 0.5], [0.9, 0.2]),
            ([0.0, 1.0], [0.2, 0.2], [1.0, 0.0]),
            ([0.7, 0.7], [0.1, 0.9], [0.4, 0.3]),
        ];
        for (a, b, c) in triples {
            let forward = joint_angle(a, b, c);
            let swapped = joint_angle(c, b, a);
            assert!(
                (forward - swapped).abs() < EPS,
                "asymmetric: {} vs {}",
                forward,
                swapped
            );
        }
    }

    #[test]
    fn test_range_over_grid() {
        // 有限・相異なる入力に対して常に 0〜180 度
        let coords = [-1.0f32, -0.5, 0.0, 0.5, 1.0];
        for &ax in &coords {
            for &ay in &coords {
                for &cx in &coords {
                    for &cy in &coords {
                        let angle = joint_angle([ax, ay], [0.1, 0.2], [cx, cy]);
                        assert!(
                            (0.0..=180.0).contains(&angle),
                            "out of range: {} for a=({},{}), c=({},{})",
                            angle,
                            ax,
                            ay,
                            cx,
                            cy
                        );
                    }
                }
            }
        }
    }
}
