//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use chrono::NaiveDate;
use game_lounge::models::game::Game;
use game_lounge::models::reservation::Reservation;
use game_lounge::models::service::Service;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = game_lounge::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    game_lounge::db::run_migrations(&pool).await?;

    println!("=== Game Lounge Seed Script ===");

    seed_games(&pool).await?;
    let services = seed_services(&pool).await?;
    seed_reservations(&pool, &services).await?;

    println!("\n=== Seed complete! ===");
    println!("Dashboard: http://localhost:3000/admin");

    Ok(())
}

async fn seed_games(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Games already exist ({count})");
        return Ok(());
    }

    let games = vec![
        ("Catan", Some("Board")),
        ("Carcassonne", Some("Board")),
        ("Ticket to Ride", Some("Board")),
        ("Dixit", Some("Party")),
        ("Codenames", Some("Party")),
        ("Hanabi", Some("Card")),
        ("The Crew", Some("Card")),
        ("Liar's Dice", Some("Dice")),
        ("Mystery box", None),
    ];

    for &(name, category) in &games {
        let game = sqlx::query_as::<_, Game>(
            "INSERT INTO games (name, category) VALUES ($1, $2)
             RETURNING id, name, category, created_at",
        )
        .bind(name)
        .bind(category)
        .fetch_one(pool)
        .await?;
        println!("  + {} ({})", game.name, game.category.as_deref().unwrap_or("-"));
    }

    println!("[done] Created {} games", games.len());
    Ok(())
}

async fn seed_services(pool: &PgPool) -> anyhow::Result<Vec<Service>> {
    let existing = sqlx::query_as::<_, Service>(
        "SELECT id, name, created_at FROM services ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    if !existing.is_empty() {
        println!("[skip] Services already exist ({})", existing.len());
        return Ok(existing);
    }

    let mut services = Vec::new();
    for name in ["Standard table", "Private room", "Game master session", "Tournament table"] {
        let service = sqlx::query_as::<_, Service>(
            "INSERT INTO services (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        services.push(service);
    }

    println!("[done] Created {} services", services.len());
    Ok(services)
}

async fn seed_reservations(pool: &PgPool, services: &[Service]) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Reservations already exist ({count})");
        return Ok(());
    }

    // The last service stays without reservations so the dashboard shows a zero bar.
    let bookable = &services[..services.len().saturating_sub(1)];
    if bookable.is_empty() {
        println!("[skip] No services to book");
        return Ok(());
    }

    // Two years of data so month buckets can be compared with and without year merging.
    let mut created = 0;
    for year in [2024, 2025] {
        for month in 1..=12u32 {
            let bookings = (month % 4) + 1;
            for n in 0..bookings {
                let day = 1 + (n * 7) % 28;
                let date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or_else(|| anyhow::anyhow!("invalid date {year}-{month}-{day}"))?;
                let service = &bookable[(month + n) as usize % bookable.len()];

                sqlx::query_as::<_, Reservation>(
                    "INSERT INTO reservations (reservation_date, service_id) VALUES ($1, $2)
                     RETURNING id, reservation_date, service_id, created_at",
                )
                .bind(date)
                .bind(service.id)
                .fetch_one(pool)
                .await?;
                created += 1;
            }
        }
    }

    println!("[done] Created {created} reservations");
    Ok(())
}
