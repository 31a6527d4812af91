//! 워드벡터 정렬 맵 준비 라이브러리
//!
//! torch에서 내보낸 정방 정렬 맵(safetensors 컨테이너)을 서빙 서버가
//! mmap으로 읽는 raw f64(LE) 바이너리로 변환하고, 기록 직후 라운드트립을
//! 검증해서 최대 절대 오차를 보고한다.

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 로드
    AlignmentMap,
    // 변환
    bin_path_for, transposed_row_major, write_map_bin,
    // 검증
    max_abs_diff, read_map_bin, verify_round_trip, RoundTripReport,
    // 파이프라인
    prepare_map_file,
};
