use async_trait::async_trait;
use luckybot_core::Participant;
use luckybot_draw::{game_for_date, resolve, FairRandom, GameChannel, GameVariant, Result};

/// Rolls locally and prints every announcement.
struct LocalTable;

#[async_trait]
impl GameChannel for LocalTable {
    async fn roll(&self, _variant: GameVariant) -> Result<u8> {
        Ok(FairRandom::new().roll_die())
    }

    async fn announce(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let today = chrono::Local::now().date_naive();
    let variant = game_for_date(today);
    println!("Today's game: {}\n", variant);

    let participants = vec![
        Participant::new(1, "alice"),
        Participant::new(2, "bob"),
        Participant::new(3, "carol"),
        Participant::new(4, "dave"),
    ];

    let report = resolve(&LocalTable, variant, participants).await?;

    println!(
        "\n{} won after {} round(s)",
        report.winner.name,
        report.rounds.len()
    );

    Ok(())
}
