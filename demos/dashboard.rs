use chrono::Local;

use scoreboard_client::{stats, CacheMirror, MatchStore, ScoreboardClient};

#[tokio::main]
async fn main() {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let client = ScoreboardClient::new(base_url);

    let mut store = MatchStore::with_cache(CacheMirror::in_dir("."));
    store.load_initial(&client).await;

    if let Some(scores) = std::env::args().nth(2) {
        let (a, b) = scores.split_once('-').expect("scores as A-B, e.g. 3-1");
        let record = store.submit(
            &client,
            Local::now().date_naive(),
            a.parse().unwrap(),
            b.parse().unwrap(),
        );
        println!(
            "Recorded match {} in week {}: {:?}",
            record.match_number, record.week, record.winner
        );
    }

    let matches = store.matches();
    let overall = stats::overall(matches);
    println!(
        "{} matches, {} goals ({} per match), leader: {}",
        overall.total_matches, overall.total_goals, overall.avg_goals, overall.current_leader
    );

    for point in stats::trend(matches) {
        println!(
            "after match {}: A {:>5.1}% | B {:>5.1}%",
            point.match_number, point.player_a_win_rate, point.player_b_win_rate
        );
    }

    for week in stats::weekly(matches) {
        println!(
            "week {}: {} matches, champion {}",
            week.week,
            week.matches.len(),
            week.champion
        );
    }
}
