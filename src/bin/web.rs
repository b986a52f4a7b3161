//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; override with env: HOST, PORT.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use mafia_protocol_web::{
    calculate_rating, export::rating_to_csv, find_revote_candidates, logic, GameMeta, GameSession,
    GameStore, MemoryStore, Night, PlayerId, Role, SessionId, Team,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: GameSession,
    last_activity: Instant,
}

/// In-memory state: live sessions by id plus the game store.
struct AppInner {
    sessions: HashMap<SessionId, SessionEntry>,
    store: MemoryStore,
}

type AppState = Data<RwLock<AppInner>>;

/// Sessions not touched for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct DateBody {
    date: String,
}

#[derive(Deserialize)]
struct NotesBody {
    notes: String,
}

#[derive(Deserialize)]
struct NicknameBody {
    nickname: String,
}

#[derive(Deserialize)]
struct RoleBody {
    role: Option<Role>,
}

#[derive(Deserialize)]
struct WinnerBody {
    team: Option<Team>,
}

#[derive(Deserialize)]
struct FoulsBody {
    fouls: u8,
}

#[derive(Deserialize)]
struct TechFoulsBody {
    count: u8,
}

#[derive(Deserialize)]
struct AdjustmentBody {
    value: String,
}

#[derive(Deserialize)]
struct FlagsBody {
    ss: Option<bool>,
    vskr: Option<bool>,
}

#[derive(Deserialize)]
struct ShotBody {
    value: String,
}

#[derive(Deserialize)]
struct BestMoveBody {
    numbers: String,
}

#[derive(Deserialize)]
struct NumbersListBody {
    list: String,
}

#[derive(Deserialize)]
struct VotesBody {
    votes: Vec<u32>,
}

#[derive(Deserialize)]
struct RevoteBody {
    candidates: Vec<u8>,
    votes: Vec<u32>,
}

#[derive(Deserialize)]
struct RatingQuery {
    start: NaiveDate,
    end: NaiveDate,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and seat slot.
#[derive(Deserialize)]
struct SessionSlotPath {
    id: SessionId,
    slot: u8,
}

/// Path segments: session id and voting number.
#[derive(Deserialize)]
struct SessionVotingPath {
    id: SessionId,
    number: u8,
}

/// Path segments: session id and shooting night ("first" or "1".."6").
#[derive(Deserialize)]
struct SessionNightPath {
    id: SessionId,
    night: String,
}

#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn parse_night(raw: &str) -> Option<Night> {
    if raw == "first" {
        return Some(Night::First);
    }
    match raw.parse::<u8>() {
        Ok(n) if (1..=mafia_protocol_web::constants::MAX_NIGHTS).contains(&n) => {
            Some(Night::Night(n))
        }
        _ => None,
    }
}

/// Runs `f` on the session with the given id; maps the session result to
/// JSON-or-400 the same way for every mutation endpoint.
fn with_session<F>(state: &AppState, id: SessionId, f: F) -> HttpResponse
where
    F: FnOnce(&mut GameSession) -> Result<(), mafia_protocol_web::SessionError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match f(&mut entry.session) {
        Ok(()) => HttpResponse::Ok().json(&entry.session),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "mafia-protocol-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new game session (client stores the id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState) -> HttpResponse {
    let session = GameSession::new();
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.sessions.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.sessions.get(&id).unwrap().session)
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |_| Ok(()))
}

#[put("/api/sessions/{id}/date")]
async fn api_set_date(state: AppState, path: Path<SessionPath>, body: Json<DateBody>) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_date(&body.date))
}

#[put("/api/sessions/{id}/meta")]
async fn api_set_meta(state: AppState, path: Path<SessionPath>, body: Json<GameMeta>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_meta(body.into_inner());
        Ok(())
    })
}

#[put("/api/sessions/{id}/notes")]
async fn api_set_notes(state: AppState, path: Path<SessionPath>, body: Json<NotesBody>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_notes(body.notes.clone());
        Ok(())
    })
}

/// Seat a roster player at a slot (empty nickname clears the seat).
#[put("/api/sessions/{id}/seats/{slot}/nickname")]
async fn api_set_nickname(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<NicknameBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_nickname(path.slot, &body.nickname))
}

/// Assign or clear a role (rejected once roles are locked).
#[put("/api/sessions/{id}/seats/{slot}/role")]
async fn api_set_role(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<RoleBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_role(path.slot, body.role))
}

/// Fill unset roles with Civilian once 3 blacks + Sheriff are dealt.
#[post("/api/sessions/{id}/roles/auto-fill")]
async fn api_auto_fill_roles(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| s.auto_fill_roles())
}

/// Lock roles; requires the exact 2/1/1/6 composition.
#[post("/api/sessions/{id}/roles/lock")]
async fn api_lock_roles(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| s.lock_roles())
}

/// Check the role composition without locking: {valid, errors}.
#[get("/api/sessions/{id}/roles/validate")]
async fn api_validate_roles(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    match logic::validate_roles(&entry.session.seats) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "valid": true, "errors": [] })),
        Err(errors) => {
            HttpResponse::Ok().json(serde_json::json!({ "valid": false, "errors": errors }))
        }
    }
}

#[put("/api/sessions/{id}/winner")]
async fn api_set_winner(state: AppState, path: Path<SessionPath>, body: Json<WinnerBody>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_winner(body.team);
        Ok(())
    })
}

#[put("/api/sessions/{id}/seats/{slot}/fouls")]
async fn api_set_fouls(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<FoulsBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_fouls(path.slot, body.fouls))
}

#[put("/api/sessions/{id}/seats/{slot}/tech-fouls")]
async fn api_set_tech_fouls(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<TechFoulsBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_tech_fouls(path.slot, body.count))
}

#[put("/api/sessions/{id}/seats/{slot}/bonus")]
async fn api_set_bonus(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<AdjustmentBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_bonus_points(path.slot, &body.value))
}

#[put("/api/sessions/{id}/seats/{slot}/penalty")]
async fn api_set_penalty(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<AdjustmentBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| s.set_penalty_points(path.slot, &body.value))
}

/// Protocol-only flags: self-elimination (ss) and role reveal (vskr).
#[put("/api/sessions/{id}/seats/{slot}/flags")]
async fn api_set_flags(
    state: AppState,
    path: Path<SessionSlotPath>,
    body: Json<FlagsBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        if let Some(ss) = body.ss {
            s.set_ss(path.slot, ss)?;
        }
        if let Some(vskr) = body.vskr {
            s.set_vskr(path.slot, vskr)?;
        }
        Ok(())
    })
}

/// Record a shooting cell: slot number, miss marker, or empty to clear.
#[put("/api/sessions/{id}/shootings/{night}")]
async fn api_record_shot(
    state: AppState,
    path: Path<SessionNightPath>,
    body: Json<ShotBody>,
) -> HttpResponse {
    let night = match parse_night(&path.night) {
        Some(n) => n,
        None => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Night must be \"first\" or 1-6" }))
        }
    };
    with_session(&state, path.id, |s| s.record_shot(night, &body.value))
}

#[put("/api/sessions/{id}/best-move")]
async fn api_set_best_move(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<BestMoveBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_best_move_numbers(body.numbers.clone());
        Ok(())
    })
}

/// Open the next voting (at most 6).
#[post("/api/sessions/{id}/votings")]
async fn api_add_voting(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| s.add_voting().map(|_| ()))
}

#[put("/api/sessions/{id}/votings/{number}/candidates")]
async fn api_set_voting_candidates(
    state: AppState,
    path: Path<SessionVotingPath>,
    body: Json<NumbersListBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_voting_candidates(path.number, &body.list)
    })
}

/// Record vote counts; the tally may not exceed the alive count.
#[put("/api/sessions/{id}/votings/{number}/votes")]
async fn api_set_voting_votes(
    state: AppState,
    path: Path<SessionVotingPath>,
    body: Json<VotesBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_voting_votes(path.number, body.votes.clone())?;
        let alive = s.alive_seats().len();
        let voting = s
            .voting(path.number)
            .ok_or(mafia_protocol_web::SessionError::VotingNotFound(path.number))?;
        logic::validate_voting(voting, alive)
            .map_err(mafia_protocol_web::SessionError::InvalidField)
    })
}

#[put("/api/sessions/{id}/votings/{number}/eliminated")]
async fn api_set_voting_eliminated(
    state: AppState,
    path: Path<SessionVotingPath>,
    body: Json<NumbersListBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.set_voting_eliminated(path.number, &body.list)
    })
}

/// Attach a tie-break round to a voting (a third one is rejected).
#[post("/api/sessions/{id}/votings/{number}/revotes")]
async fn api_add_revote(
    state: AppState,
    path: Path<SessionVotingPath>,
    body: Json<RevoteBody>,
) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.add_revote(path.number, body.candidates.clone(), body.votes.clone())
    })
}

/// Tie-break candidates for a completed voting.
#[get("/api/sessions/{id}/votings/{number}/revote-candidates")]
async fn api_revote_candidates(state: AppState, path: Path<SessionVotingPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    match entry.session.voting(path.number) {
        Some(voting) => HttpResponse::Ok().json(find_revote_candidates(voting)),
        None => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": format!("No voting number {}", path.number) })),
    }
}

/// Seats still at the table.
#[get("/api/sessions/{id}/alive")]
async fn api_alive_seats(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    HttpResponse::Ok().json(entry.session.alive_seats())
}

/// Pre-save check: all blocking errors plus non-blocking warnings.
#[get("/api/sessions/{id}/validate")]
async fn api_validate_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    let session = &entry.session;
    let warnings = logic::collect_warnings(session, session.alive_seats().len());
    match logic::validate_protocol(session) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "valid": true, "errors": [], "warnings": warnings
        })),
        Err(errors) => HttpResponse::Ok().json(serde_json::json!({
            "valid": false, "errors": errors, "warnings": warnings
        })),
    }
}

/// Save the protocol: freeze the session, store the game, fold each seat's
/// result into the roster stats. The session stays editable afterwards,
/// but the stored snapshot is immutable.
#[post("/api/sessions/{id}/save")]
async fn api_save_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.sessions.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    entry.session.recompute_points();
    let stored = match entry.session.freeze() {
        Ok(stored) => stored,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };

    let winner = stored.winner_team;
    let seats = stored.protocol.seats.clone();
    if let Err(e) = g.store.save_game(stored.clone()) {
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() }));
    }
    for seat in &seats {
        let won = seat.team() == winner;
        // Seats may hold walk-in players not yet on the roster; skip those.
        if let Err(e) = g.store.update_player_stats(
            &seat.nickname,
            won,
            seat.points,
            seat.bonus_points,
            seat.penalty_points,
        ) {
            log::warn!("Stats not updated for {}: {}", seat.nickname, e);
        }
    }
    log::info!("Game {} saved ({} winner)", stored.id, winner);
    HttpResponse::Ok().json(stored)
}

/// Roster, ordered by nickname, with career win percentage.
#[get("/api/players")]
async fn api_get_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let players: Vec<serde_json::Value> = g
        .store
        .get_players()
        .into_iter()
        .map(|p| {
            let pct = p.win_percentage();
            let mut value = serde_json::to_value(&p).unwrap_or_default();
            if let Some(map) = value.as_object_mut() {
                map.insert("win_percentage".to_string(), serde_json::json!(pct));
            }
            value
        })
        .collect();
    HttpResponse::Ok().json(players)
}

#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<NicknameBody>) -> HttpResponse {
    let nickname = match logic::validate_nickname(&body.nickname) {
        Ok(n) => n,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e })),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.add_player(&nickname) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[put("/api/players/{id}")]
async fn api_rename_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<NicknameBody>,
) -> HttpResponse {
    let nickname = match logic::validate_nickname(&body.nickname) {
        Ok(n) => n,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e })),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.rename_player(path.id, &nickname) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[delete("/api/players/{id}")]
async fn api_delete_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.delete_player(path.id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Period standings over stored games, inclusive date range.
#[get("/api/rating")]
async fn api_rating(state: AppState, query: Query<RatingQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let games = g.store.get_games(None);
    HttpResponse::Ok().json(calculate_rating(&games, query.start, query.end))
}

/// Same standings, rendered as a CSV download.
#[get("/api/rating.csv")]
async fn api_rating_csv(state: AppState, query: Query<RatingQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let games = g.store.get_games(None);
    let rows = calculate_rating(&games, query.start, query.end);
    match rating_to_csv(&rows) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Whole-database backup as JSON.
#[get("/api/backup")]
async fn api_export_backup(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.store.export_all())
}

/// Replace the database with an uploaded backup.
#[post("/api/backup")]
async fn api_import_backup(
    state: AppState,
    body: Json<mafia_protocol_web::Backup>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.import_all(body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppInner {
        sessions: HashMap::new(),
        store: MemoryStore::new(),
    }));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.sessions.len();
            g.sessions
                .retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.sessions.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_set_date)
            .service(api_set_meta)
            .service(api_set_notes)
            .service(api_set_nickname)
            .service(api_set_role)
            .service(api_auto_fill_roles)
            .service(api_lock_roles)
            .service(api_validate_roles)
            .service(api_set_winner)
            .service(api_set_fouls)
            .service(api_set_tech_fouls)
            .service(api_set_bonus)
            .service(api_set_penalty)
            .service(api_set_flags)
            .service(api_record_shot)
            .service(api_set_best_move)
            .service(api_add_voting)
            .service(api_set_voting_candidates)
            .service(api_set_voting_votes)
            .service(api_set_voting_eliminated)
            .service(api_add_revote)
            .service(api_revote_candidates)
            .service(api_alive_seats)
            .service(api_validate_session)
            .service(api_save_session)
            .service(api_get_players)
            .service(api_add_player)
            .service(api_rename_player)
            .service(api_delete_player)
            .service(api_rating)
            .service(api_rating_csv)
            .service(api_export_backup)
            .service(api_import_backup)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
