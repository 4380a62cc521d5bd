#![allow(dead_code)]

use strip_scraper::CliConfig;

/// Eight teams of one Cadet group: (cadet name, juvenil name, cadet wins, juvenil wins).
pub const TEAMS: [(&str, &str, u32, u32); 8] = [
    ("CV Sant Cugat", "CV Sant Cugat Juvenil", 7, 6),
    ("CE Ripollet", "C.E. Ripollet", 6, 6),
    ("Club Volei Rubi", "Club Voleibol Rubi", 5, 5),
    ("CV Terrassa", "CV Terrassa Juvenil", 4, 5),
    ("AE Badalona", "A.E. Badalona", 3, 3),
    ("CV Mataro", "CV Mataró", 2, 2),
    ("CV Sabadell", "CV Sabadell Juvenil", 1, 1),
    ("UE Cornella", "U.E. Cornellà", 0, 0),
];

pub const MATCHES_PER_PAGE: u32 = 7;

pub fn row(position: usize, name: &str, wins: u32) -> String {
    let losses = MATCHES_PER_PAGE - wins;
    format!(
        "<tr><td>{position}</td><td><a href=\"equipo.php?id={position}\">{name}</a></td>\
         <td>G P G</td><td>{points}</td><td>{played}</td><td>{wins} 50%</td>\
         <td>{losses} 50%</td><td>6</td><td>4</td><td>500 71,4 ptos./part.</td>\
         <td>450 64,3 ptos./part.</td><td>1</td><td>1</td><td>0</td><td>1</td></tr>",
        points = wins * 3,
        played = MATCHES_PER_PAGE,
    )
}

pub fn page(category: &str, round: u32, rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>\
         <h2>CLASIFICACIONES {category}</h2>\
         <h4>PRIMERA FASE - GRUP A</h4><h4>Jornada: {round}</h4>\
         <table><tr><th>Pos</th><th>Equipo</th><th>Racha</th><th>PT</th><th>PJ</th>\
         <th>PG</th><th>PP</th><th>SF</th><th>SC</th><th>PF</th><th>PC</th>\
         <th>3-0</th><th>3-2</th><th>2-3</th><th>0-3</th></tr>{}</table>\
         </body></html>",
        rows.concat()
    )
}

pub fn cadet_page() -> String {
    let rows: Vec<String> = TEAMS
        .iter()
        .enumerate()
        .map(|(i, (name, _, wins, _))| row(i + 1, name, *wins))
        .collect();
    page("Cadet 4a Div Fem", 7, &rows)
}

/// Juvenil rows in their own standings order, which differs from the Cadet one.
pub fn juvenil_page() -> String {
    let order = [1, 0, 3, 2, 4, 5, 6, 7];
    let rows: Vec<String> = order
        .iter()
        .enumerate()
        .map(|(pos, &i)| row(pos + 1, TEAMS[i].1, TEAMS[i].3))
        .collect();
    page("Juvenil 4a Div Fem", 8, &rows)
}

pub fn config(urls: Vec<String>, files: Vec<String>, output_path: &str) -> CliConfig {
    CliConfig {
        urls,
        files,
        output_path: output_path.to_string(),
        formats: vec!["csv".to_string(), "xlsx".to_string()],
        no_strip: false,
        snake_groups: 4,
        timeout: 5,
        user_agent: None,
        verbose: false,
        json_logs: false,
    }
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
