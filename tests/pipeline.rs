//! Полный проход через facade: сканирование, отчёт, копирование


use std::fs;
use std::path::PathBuf;

use backuper::facade::backup_facade::BackupFacade;
use backuper::facade::traits::i_backup::BackupFacadeTrait;
use backuper::models::scan::ExtensionStat;
use backuper::service::config_service::DefaultConfigAdapter;
use backuper::service::copy::CopyService;
use backuper::service::report::ReportService;
use backuper::service::scan::ScanService;
use harness::{TestTree, MIB};

fn facade(scan_dir: PathBuf, output_dir: Option<PathBuf>) -> BackupFacade {
    BackupFacade::new(
        Box::new(DefaultConfigAdapter::new(scan_dir, output_dir)),
        Box::new(ScanService::new()),
        Box::new(ReportService::new()),
        Box::new(CopyService::new()),
    )
}

#[test]
fn example_scenario_scans_reports_and_copies() {
    let tree = TestTree::new();
    let a = tree.add_file("a.pdf", 10 * MIB);
    tree.add_file("b.txt", 5 * MIB);
    let c = tree.add_file("sub/c.jpg", 2 * MIB);
    let out = TestTree::new();

    let output = facade(tree.path().to_path_buf(), Some(out.path().to_path_buf()))
        .execute_backup()
        .unwrap();

    assert_eq!(output.scan.files, vec![a.clone(), c.clone()]);
    assert_eq!(output.scan.total_size, 12 * MIB as u64);
    assert_eq!(output.scan.stats[".pdf"], ExtensionStat { count: 1, size: 10 * MIB as u64 });
    assert_eq!(output.scan.stats[".jpg"], ExtensionStat { count: 1, size: 2 * MIB as u64 });
    assert!(output.report.contains("12.00 MB"));
    assert!(output.report.contains(".pdf: 1 файлов, 10.00 MB"));

    let copy = output.copy.expect("copy phase should run");
    assert_eq!(copy.copied, 2);
    assert_eq!(copy.progress, 2);
    assert_eq!(fs::read(out.path().join("a.pdf")).unwrap(), fs::read(&a).unwrap());
    assert_eq!(fs::read(out.path().join("sub/c.jpg")).unwrap(), fs::read(&c).unwrap());
    assert!(!out.path().join("b.txt").exists());
}

#[test]
fn scan_only_without_output_dir() {
    let tree = TestTree::new();
    tree.add_file("clip.MOV", 100);

    let output = facade(tree.path().to_path_buf(), None).execute_backup().unwrap();

    assert!(output.copy.is_none());
    assert_eq!(output.config.scan_dir, tree.path());
    assert_eq!(output.config.output_dir, None);
    assert_eq!(output.scan.stats[".mov"], ExtensionStat { count: 1, size: 100 });
}

#[test]
fn missing_root_aborts_before_copy() {
    let tree = TestTree::new();
    let out = tree.path().join("out");

    let err = facade(tree.path().join("missing"), Some(out.clone()))
        .execute_backup()
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(!out.exists());
}

#[test]
fn repeated_runs_give_identical_copies() {
    let tree = TestTree::new();
    tree.add_file("docs/report.docx", 4096);
    tree.add_file("music/a/b/track.wav", 777);
    let out = TestTree::new();

    for _ in 0..2 {
        let output = facade(tree.path().to_path_buf(), Some(out.path().to_path_buf()))
            .execute_backup()
            .unwrap();
        assert_eq!(output.copy.unwrap().copied, 2);
    }

    for rel in ["docs/report.docx", "music/a/b/track.wav"] {
        assert_eq!(
            fs::read(out.path().join(rel)).unwrap(),
            fs::read(tree.path().join(rel)).unwrap()
        );
    }
}
