// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;

/// Fresh, empty temp directory per test name.
pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("assembly_search_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Header row + three members, shaped like the published dataset.
pub const SAMPLE: &str = r#"[
  {"HG_NM":"이름","POLY_NM":"정당명","STAFF":"보좌관","SECRETARY":"선임비서관","SECRETARY2":"비서관","STATUS_CD":"재직 구분"},
  {"HG_NM":"김영수","ENG_NM":"KIM Youngsoo","POLY_NM":"무소속","TEL_NO":"02-784-0000","E_MAIL":"null","STAFF":"이민호, 박지은","SECRETARY":"최서연","SECRETARY2":"","STATUS_CD":"현직"},
  {"HG_NM":"박정민","ENG_NM":"PARK Jungmin","POLY_NM":"정당A","HOMEPAGE":null,"STAFF":"정하늘","SECRETARY":"박지은","SECRETARY2":"이수진, 한별","STATUS_CD":"현직"},
  {"HG_NM":"Kim","STAFF":"Lee, Park","SECRETARY2":"Park Two"}
]"#;

pub fn write_sample(dir: &PathBuf) -> PathBuf {
    let p = dir.join("data.json");
    fs::write(&p, SAMPLE).unwrap();
    p
}
