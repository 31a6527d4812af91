
// 모듈 간 통합 테스트
#[test]
fn 전치_평탄화와_오차_계산_연동() {
    use ndarray::arr2;

    use super::convert::transposed_row_major;
    use super::verify::max_abs_diff;

    let m = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
    let flat = transposed_row_major(&m);
    assert_eq!(flat, vec![1.0, 3.0, 2.0, 4.0]);

    let max = max_abs_diff(&flat, &flat).expect("길이가 같은데 비교 실패");
    assert_eq!(max, 0.0, "동일 시퀀스의 최대 오차는 0");
}
