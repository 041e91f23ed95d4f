use central_core::PageModel;
use central_roster::systems::{filled_player_count, move_targets, swap_candidates};
use central_roster::{GamePage, Match, RosterAction};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "match_inspector")]
#[command(about = "Generate a mock match roster and walk it through the organizer actions")]
struct Args {
    /// Match id, as it appears in `/game/{id}`
    id: String,

    /// Seed for the roster generator. Omit for a fresh roster each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Apply a scripted start / swap / move / remove / end sequence
    #[arg(short, long)]
    script: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut page = GamePage::load(args.id.clone(), seed);
    println!("Seed: {}", seed);
    print_summary(page.game());
    print_roster(page.game());

    if args.script {
        run_script(&mut page);
    }
}

/// Walk the roster through each organizer action, printing the result of every step.
fn run_script(page: &mut GamePage) {
    println!("\n=== Scripted actions ===");

    step(page, RosterAction::Start);

    let filled = filled_slots(page.game());
    if let Some(&source) = filled.first() {
        step(page, RosterAction::SelectTeam { index: source });
        if let Some(&target) = swap_candidates(page.game(), source).first() {
            step(page, RosterAction::SwapTeams { a: source, b: target });
        }
    }

    if let (Some(&from), Some(&to)) = (
        filled_slots(page.game()).first(),
        move_targets(page.game()).first(),
    ) {
        step(page, RosterAction::MoveTeam { from, to });
    }

    if let Some(&index) = filled_slots(page.game()).last() {
        step(page, RosterAction::RemoveTeam { index });
    }

    // Starting twice is refused; the match stays live.
    step(page, RosterAction::Start);
    step(page, RosterAction::End);

    println!();
    print_summary(page.game());
}

fn step(page: &mut GamePage, action: RosterAction) {
    let label = format!("{:?}", action);
    match page.apply(action) {
        Ok(()) => {
            let view = page.view();
            println!(
                "  {:<40} ok       status={} players={}",
                label, view.detail.status, view.detail.current_players
            );
        }
        Err(e) => println!("  {:<40} refused  {}", label, e),
    }
}

fn filled_slots(game: &Match) -> Vec<usize> {
    game.teams
        .iter()
        .enumerate()
        .filter(|(_, team)| team.is_filled())
        .map(|(i, _)| i)
        .collect()
}

fn print_summary(game: &Match) {
    println!("=== {} ===", game.name);
    println!("Id:        {}", game.id);
    println!("Mode:      {} ({} per team)", game.mode, game.team_size());
    println!("Map:       {}", game.map);
    println!("Platform:  {}", game.platform);
    println!("Region:    {}", game.region);
    println!("Status:    {}", game.status.label());
    println!("Host:      {} ({})", game.host.name, game.host.rank);
    println!("Created:   {}", game.time_created);
    println!(
        "Players:   {}/{} listed, {} seated",
        game.current_players,
        game.max_players,
        filled_player_count(game)
    );
}

fn print_roster(game: &Match) {
    let filled = filled_slots(game).len();
    println!("Teams:     {}/{} filled", filled, game.slot_count());

    for (slot, team) in game.teams.iter().enumerate() {
        if !team.is_filled() {
            continue;
        }
        let names: Vec<&str> = team.players.iter().map(|p| p.name.as_str()).collect();
        println!("  [{:>3}] {:<10} {}", slot + 1, team.id, names.join(", "));
    }
}
