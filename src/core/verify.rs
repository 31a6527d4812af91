//! 라운드트립 검증
//!
//! 기록한 `.bin` 파일을 다시 읽어 f64 시퀀스로 복원하고, 기록 전
//! 시퀀스와의 최대 절대 오차를 계산한다. IEEE-754 바이트 왕복은
//! 무손실이므로 정상 경로에서 오차는 정확히 0.0이다.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt};

/// 검증 결과 리포트
#[derive(Debug, Clone)]
pub struct RoundTripReport {
    /// 검증한 바이너리 경로
    pub bin_path: PathBuf,
    /// 원소 개수 (N²)
    pub elements: usize,
    /// 파일 크기 (8·N²)
    pub bytes: usize,
    /// 최대 절대 오차
    pub max_abs_diff: f64,
}

/// `.bin` 파일에서 f64 시퀀스 복원
///
/// 파일 길이는 8·expected_len 바이트와 정확히 일치해야 한다.
pub fn read_map_bin(path: &Path, expected_len: usize) -> Result<Vec<f64>> {
    let bytes = fs::read(path)
        .with_context(|| format!("바이너리 파일을 읽을 수 없습니다: {}", path.display()))?;

    let expected_bytes = expected_len * 8;
    if bytes.len() != expected_bytes {
        return Err(anyhow!(
            "바이너리 길이 불일치: {} bytes (기대: {} bytes, {})",
            bytes.len(),
            expected_bytes,
            path.display()
        ));
    }

    let mut cursor = Cursor::new(bytes.as_slice());
    let mut values = Vec::with_capacity(expected_len);
    for _ in 0..expected_len {
        values.push(cursor.read_f64::<LittleEndian>()?);
    }
    Ok(values)
}

/// 두 시퀀스의 최대 절대 오차
///
/// 길이가 같은 두 시퀀스에 대해서만 정의된다.
pub fn max_abs_diff(written: &[f64], recovered: &[f64]) -> Result<f64> {
    if written.len() != recovered.len() {
        return Err(anyhow!(
            "시퀀스 길이 불일치: {} vs {}",
            written.len(),
            recovered.len()
        ));
    }
    Ok(written
        .iter()
        .zip(recovered.iter())
        .map(|(w, r)| (w - r).abs())
        .fold(0.0, f64::max))
}

/// 기록 직후 라운드트립 검증
pub fn verify_round_trip(written: &[f64], bin_path: &Path) -> Result<RoundTripReport> {
    let recovered = read_map_bin(bin_path, written.len())?;
    let max = max_abs_diff(written, &recovered)?;

    Ok(RoundTripReport {
        bin_path: bin_path.to_path_buf(),
        elements: written.len(),
        bytes: written.len() * 8,
        max_abs_diff: max,
    })
}
