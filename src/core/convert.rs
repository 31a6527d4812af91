//! 변환 단계
//!
//! 행렬의 전치를 row-major로 평탄화해서 raw f64(LE) 바이너리로 기록한다.
//! 출력 파일은 헤더나 길이 정보 없이 8·N² 바이트 그대로이며, 크기는
//! 소비 측이 N에서 계산한다.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use ndarray::Array2;

/// 전치 행렬을 row-major 순서로 평탄화
///
/// 원본 M의 전치를 행 우선으로 읽어낸 N²개의 값.
/// 원본 기준으로는 열 우선 순회와 같다.
pub fn transposed_row_major(matrix: &Array2<f64>) -> Vec<f64> {
    matrix.t().iter().copied().collect()
}

/// 입력 경로에서 출력 `.bin` 경로 유도
///
/// 마지막 확장자 하나를 `bin`으로 교체한다. 확장자가 없으면 덧붙인다.
pub fn bin_path_for(input: &Path) -> PathBuf {
    input.with_extension("bin")
}

/// f64 시퀀스를 raw LE 바이너리로 기록
pub fn write_map_bin(path: &Path, values: &[f64]) -> Result<()> {
    let mut buffer = Vec::with_capacity(values.len() * 8);
    for &v in values {
        buffer.write_f64::<LittleEndian>(v)?;
    }
    fs::write(path, &buffer)
        .with_context(|| format!("바이너리 파일 기록 실패: {}", path.display()))?;
    Ok(())
}
