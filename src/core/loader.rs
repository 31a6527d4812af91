//! 정렬 맵 로더
//!
//! safetensors 컨테이너에서 정방 f64 행렬 하나를 읽어온다.
//! 컨테이너는 텐서를 정확히 하나만 담아야 하고, dtype·차원·정방 여부는
//! 바이너리를 기록하기 전에 전부 검증된다.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use memmap2::Mmap;
use ndarray::Array2;
use safetensors::{Dtype, SafeTensors};

/// 로드된 정렬 맵
#[derive(Debug, Clone)]
pub struct AlignmentMap {
    /// 컨테이너 안의 텐서 이름 (진단용)
    pub name: String,
    /// N×N f64 행렬
    pub matrix: Array2<f64>,
}

impl AlignmentMap {
    /// 컨테이너 파일에서 정방 행렬 로드
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("맵 파일을 열 수 없습니다: {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("맵 파일을 매핑할 수 없습니다: {}", path.display()))?;
        let tensors = SafeTensors::deserialize(&mmap)
            .with_context(|| format!("safetensors 역직렬화 실패: {}", path.display()))?;

        let names = tensors.names();
        if names.len() != 1 {
            return Err(anyhow!(
                "컨테이너에는 텐서가 정확히 하나 있어야 합니다 (발견: {}개, 이름: {:?})",
                names.len(),
                names
            ));
        }
        let name = names[0].to_string();
        let view = tensors.tensor(&name)?;

        // dtype 고정: f64 (타입 혼용 비지원)
        if view.dtype() != Dtype::F64 {
            return Err(anyhow!(
                "지원하지 않는 dtype: {:?} (기대: F64, 텐서: {})",
                view.dtype(),
                name
            ));
        }

        let shape = view.shape();
        if shape.len() != 2 {
            return Err(anyhow!(
                "2차원 행렬이 아닙니다: shape {:?} (텐서: {})",
                shape,
                name
            ));
        }
        let (rows, cols) = (shape[0], shape[1]);
        if rows != cols {
            return Err(anyhow!(
                "정방 행렬이 아닙니다: {}×{} (텐서: {})",
                rows,
                cols,
                name
            ));
        }
        if rows == 0 {
            return Err(anyhow!("빈 행렬입니다 (0×0, 텐서: {})", name));
        }

        let data = view.data();
        let expected_bytes = rows * cols * 8;
        if data.len() != expected_bytes {
            return Err(anyhow!(
                "텐서 데이터 길이 불일치: {} bytes (기대: {} bytes, 텐서: {})",
                data.len(),
                expected_bytes,
                name
            ));
        }

        // LE 바이트 → f64 (row-major 순서 유지)
        let values: Vec<f64> = data
            .chunks_exact(8)
            .map(|chunk| {
                f64::from_le_bytes([
                    chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
                ])
            })
            .collect();

        let matrix = Array2::from_shape_vec((rows, cols), values)
            .with_context(|| format!("행렬 구성 실패: {}×{}", rows, cols))?;

        Ok(Self { name, matrix })
    }

    /// 행렬 크기 N (정방이므로 행 수 == 열 수)
    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }
}
