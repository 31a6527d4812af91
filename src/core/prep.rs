//! 맵 준비 파이프라인
//!
//! 로드 → 전치·평탄화 → 기록 → 라운드트립 검증을 한 번에 수행한다.

use std::path::Path;

use anyhow::Result;

use super::convert::{bin_path_for, transposed_row_major, write_map_bin};
use super::loader::AlignmentMap;
use super::verify::{verify_round_trip, RoundTripReport};

/// 정렬 맵 파일 하나를 변환하고 검증
///
/// 입력과 같은 경로에 확장자만 `.bin`으로 바꾼 파일을 기록하고,
/// 즉시 다시 읽어 최대 절대 오차를 리포트로 돌려준다.
pub fn prepare_map_file(input: &Path) -> Result<RoundTripReport> {
    let map = AlignmentMap::load(input)?;
    let flat = transposed_row_major(&map.matrix);
    let bin_path = bin_path_for(input);

    write_map_bin(&bin_path, &flat)?;
    verify_round_trip(&flat, &bin_path)
}
