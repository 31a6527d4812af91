//! 정렬 맵 변환 CLI
//!
//! 사용법: `prepare_map <맵 파일 경로>`
//!
//! 입력과 같은 위치에 확장자만 `.bin`으로 바꾼 파일을 기록하고,
//! 처리한 경로와 라운드트립 최대 절대 오차 두 줄을 출력한다.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

use wv_map_prep::prepare_map_file;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("prepare_map")
        .version(env!("CARGO_PKG_VERSION"))
        .about("정방 정렬 맵(safetensors)을 서버용 raw f64 바이너리로 변환하고 검증")
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("PATH")
                .help("변환할 정렬 맵 파일 경로"),
        )
        .get_matches();

    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());

    println!("처리 중: {}", input.display());
    let report = prepare_map_file(&input)?;
    println!("최대 절대 오차: {:e}", report.max_abs_diff);

    Ok(())
}
