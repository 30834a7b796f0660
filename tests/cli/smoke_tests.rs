use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::DataRepo;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_silk-data-range"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("--silkclass"));
}

#[test]
fn prints_the_report_for_a_data_root() {
    let repo = DataRepo::sample();
    bin()
        .args(["-p", repo.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("CLASS|TYPE|FROM > TO ('None' indicates no data found)"))
        .stdout(predicate::str::contains("isr|tcp|2021-01-05 > 2021-01-06\n"))
        .stdout(predicate::str::contains("all|in|None > None\n"))
        .stdout(predicate::str::contains("scratch\n"));
}

#[test]
fn quiet_output_is_just_the_table() {
    let repo = DataRepo::sample();
    bin().args(["-q", "-p", repo.path_str()]).assert().success().stdout(predicate::eq(
        "CLASS|TYPE|FROM > TO ('None' indicates no data found)\nall|in|None > None\nisr|tcp|2021-01-05 > 2021-01-06\n",
    ));
}

#[test]
fn dry_run_succeeds_without_a_report() {
    let repo = DataRepo::sample();
    bin()
        .args(["--dryrun", "--datapath", repo.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO] Exiting due to --dryrun option"))
        .stdout(predicate::str::contains("CLASS|TYPE").not());
}

#[test]
fn verbose_names_the_paths_in_use() {
    let repo = DataRepo::sample();
    bin()
        .args(["-v", "-p", repo.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("as the data parent directory"))
        .stdout(predicate::str::contains("Starting search for oldest & newest data files for class: isr, type: tcp"));
}

#[test]
fn missing_silk_conf_exits_with_failure() {
    let repo = DataRepo::unconfigured();
    bin()
        .args(["-p", repo.path_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CLASS|TYPE").not())
        .stderr(predicate::str::contains("silk.conf"))
        .stderr(predicate::str::contains("hint: --datapath"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    bin().arg("--bogus").assert().code(2);
}

#[test]
fn json_format_parses() {
    let repo = DataRepo::sample();
    let assert = bin().args(["--format", "json", "-p", repo.path_str()]).assert().success();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["partitions"].as_array().unwrap().len(), 2);
}

#[test]
fn stray_day_directories_do_not_abort_the_run() {
    let mut repo = DataRepo::new();
    for day in 1..=31 {
        repo = repo.dir(&format!("isr/tcp/2021/1/{day}")).dir(&format!("isr/tcp/2021/1/{day}.old"));
    }
    let repo = repo.file("isr", "tcp", ["2021", "1", "12"], "tcp-S0_20210112.00");
    bin()
        .args(["-q", "-p", repo.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("isr|tcp|2021-1-12 > 2021-1-12\n"));
}
