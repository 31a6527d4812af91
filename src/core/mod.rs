//! # 정렬 맵 준비 핵심 모듈
//!
//! 변환기/검증기의 구성 요소들

pub mod convert;
pub mod loader;
pub mod prep;
pub mod verify;

// 주요 타입들 재수출
pub use convert::{bin_path_for, transposed_row_major, write_map_bin};
pub use loader::AlignmentMap;
pub use prep::prepare_map_file;
pub use verify::{max_abs_diff, read_map_bin, verify_round_trip, RoundTripReport};

#[cfg(test)]
mod __tests__;
