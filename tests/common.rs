#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pres() -> Command {
    cargo_bin_cmd!("presencia")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presencia.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV extract into the temp dir and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presencia.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write csv extract");
    p
}

pub const WORK_ORDERS_CSV: &str = "\
employee_id;order_number;operation;article;start_date;start_time;end_date;end_time;qty_produced;qty_planned
E001;OF-100;10;PIEZA-A;01/09/2025;08:00:00;01/09/2025;10:00:00;40;50
E001;OF-101;20;PIEZA-B;2025-09-01;09:00;2025-09-01;11:00;10;10
E001;OF-102;10;LIMPIEZA;2025-09-01T00:00:00;1899-12-30T13:00:00;;1899-12-30T14:00:00;;
E001;OF-103;10;PIEZA-C;01/09/2025;15:00;01/09/2025;14:00;;
E002;OF-200;10;PIEZA-A;2025-09-15;08:00;2025-09-15;12:00;100;100
";

pub const PUNCHES_CSV: &str = "\
employee_id,date,time,kind
E001,01/09/2025,07:30,E
E001,01/09/2025,16:30,S
E002,2025-09-15,08:00,in
E002,2025-09-15,16:00,out
";

/// Initialize DB and import a small dataset useful for many tests
///
/// E001 on 2025-09-01: 9h presence, jobs 08-10 and 09-11 (overlapping),
/// 1h cleaning, one inverted row.
/// E002 on 2025-09-15: 8h presence, one 4h job.
pub fn init_db_with_data(db_path: &str) {
    pres()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let wo = write_csv(&format!("{}_wo", file_tag(db_path)), WORK_ORDERS_CSV);
    pres()
        .args(["--db", db_path, "import", "--kind", "work-orders", "--file", &wo])
        .assert()
        .success();

    let pu = write_csv(&format!("{}_pu", file_tag(db_path)), PUNCHES_CSV);
    pres()
        .args(["--db", db_path, "import", "--kind", "punches", "--file", &pu])
        .assert()
        .success();
}

fn file_tag(db_path: &str) -> String {
    PathBuf::from(db_path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "data".to_string())
}
