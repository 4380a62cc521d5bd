mod common;

use httpmock::prelude::*;
use std::path::Path;
use strip_scraper::domain::ports::Pipeline;
use strip_scraper::{EtlEngine, LocalStorage, StripError, StripPipeline};
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_strip_standings_over_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("outputs").to_string_lossy().to_string();

    let server = MockServer::start();
    let cadet = server.mock(|when, then| {
        when.method(GET).path("/cadet");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(common::cadet_page());
    });
    let juvenil = server.mock(|when, then| {
        when.method(GET).path("/juvenil");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(common::juvenil_page());
    });

    let config = common::config(
        vec![server.url("/cadet"), server.url("/juvenil")],
        vec![],
        &output_path,
    );
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = StripPipeline::new(storage, config).unwrap();
    let engine = EtlEngine::new(pipeline);

    let written = engine.run().await.unwrap();

    cadet.assert();
    juvenil.assert();

    let today = common::today();
    let csv_path = Path::new(&output_path).join(format!("Tira 4a Div Fem-{}.csv", today));
    let xlsx_path = Path::new(&output_path).join(format!("Tira 4a Div Fem-{}.xlsx", today));
    assert_eq!(written.len(), 2);
    assert!(csv_path.exists());
    assert!(xlsx_path.exists());

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "Posició Global");
    assert_eq!(&headers[15], "Grup Nou");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 8);

    let names: Vec<&str> = rows.iter().map(|r| &r[1]).collect();
    assert_eq!(
        names,
        vec![
            "CV Sant Cugat",
            "C.E. Ripollet",
            "Club Voleibol Rubi",
            "CV Terrassa",
            "A.E. Badalona",
            "CV Mataro",
            "CV Sabadell",
            "U.E. Cornellà",
        ]
    );

    let group_positions: Vec<&str> = rows.iter().map(|r| &r[5]).collect();
    assert_eq!(group_positions, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);

    let snake: Vec<&str> = rows.iter().map(|r| &r[15]).collect();
    assert_eq!(snake, vec!["1", "2", "3", "4", "4", "3", "2", "1"]);

    // 13 wins, 39 points out of 28 strip matches (84 points).
    let leader = &rows[0];
    assert_eq!(&leader[2], "46.43");
    assert_eq!(&leader[3], "39");
    assert_eq!(&leader[4], "PRIMERA FASE - GRUP A");
    assert_eq!(&leader[6], "14");
    assert_eq!(&leader[7], "13");
    assert_eq!(&leader[8], "1");
    assert_eq!(&leader[11], "4");
    assert_eq!(&leader[14], "100");

    let last = &rows[7];
    assert_eq!(&last[2], "0.00");
    assert_eq!(&last[7], "0");
}

#[tokio::test]
async fn test_saved_pages_merge_with_full_denominator() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_string_lossy().to_string();

    let cadet_file = temp_dir.path().join("cadet.html");
    let juvenil_file = temp_dir.path().join("juvenil.html");
    std::fs::write(&cadet_file, common::cadet_page()).unwrap();
    std::fs::write(&juvenil_file, common::juvenil_page()).unwrap();

    let config = common::config(
        vec![],
        vec![
            cadet_file.to_string_lossy().to_string(),
            juvenil_file.to_string_lossy().to_string(),
        ],
        &output_path,
    );
    let pipeline = StripPipeline::new(LocalStorage::new(output_path), config).unwrap();

    let pages = pipeline.extract().await.unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].groups[0].teams[0].name, "C.E. Ripollet");

    let globals = pipeline.transform(pages).await.unwrap();
    assert_eq!(globals.len(), 1);

    let global = &globals[0];
    assert_eq!(global.competition, "Tira 4a Div");
    assert_eq!(global.category, "Tira 4a Div Fem");

    let second = &global.teams[1].stats;
    assert_eq!(second.name, "C.E. Ripollet");
    assert_eq!(second.total_points, 36);
    assert!((second.points_percentage - 36.0 / 84.0 * 100.0).abs() < 1e-9);
    assert_eq!(second.recent_form, "GPGGPG");
}

#[tokio::test]
async fn test_missing_juvenil_page_aborts_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("outputs").to_string_lossy().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cadet");
        then.status(200).body(common::cadet_page());
    });

    let config = common::config(vec![server.url("/cadet")], vec![], &output_path);
    let pipeline = StripPipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    let engine = EtlEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, StripError::MissingCounterpart { ref division } if division == "4a Div"));
    assert!(!Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_roster_mismatch_names_the_group() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_string_lossy().to_string();

    let short_juvenil = common::page(
        "Juvenil 4a Div Fem",
        8,
        &[common::row(1, "CV Sant Cugat Juvenil", 6)],
    );

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cadet");
        then.status(200).body(common::cadet_page());
    });
    server.mock(|when, then| {
        when.method(GET).path("/juvenil");
        then.status(200).body(short_juvenil);
    });

    let config = common::config(
        vec![server.url("/cadet"), server.url("/juvenil")],
        vec![],
        &output_path,
    );
    let pipeline = StripPipeline::new(LocalStorage::new(output_path), config).unwrap();

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();
    match err {
        StripError::RosterSizeMismatch {
            group,
            cadet,
            juvenil,
        } => {
            assert_eq!(group, "PRIMERA FASE - GRUP A");
            assert_eq!(cadet, 8);
            assert_eq!(juvenil, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_no_strip_mode_exports_each_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_string_lossy().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cadet");
        then.status(200).body(common::cadet_page());
    });

    let mut config = common::config(vec![server.url("/cadet")], vec![], &output_path);
    config.no_strip = true;
    config.formats = vec!["json".to_string()];
    config.snake_groups = 2;

    let pipeline = StripPipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    let written = EtlEngine::new(pipeline).run().await.unwrap();

    let json_path = Path::new(&output_path).join(format!("Cadet 4a Div Fem-{}.json", common::today()));
    assert_eq!(written, vec![json_path.display().to_string()]);

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    let teams = report["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 8);
    assert_eq!(teams[0]["stats"]["name"], "CV Sant Cugat");
    assert_eq!(teams[0]["stats"]["url"], server.url("/equipo.php?id=1"));
    assert_eq!(report["category"], "Cadet 4a Div Fem");
    assert_eq!(teams[3]["stats"]["new_group"], 1);
}
