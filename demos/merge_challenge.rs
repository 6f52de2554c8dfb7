use gitsim::sdk::SimClient;
use gitsim::core::{LogKind, SeedCommit, SeedState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Merge challenge - driving a gitsim session over HTTP\n");

    let client = SimClient::new("http://localhost:3030");

    if !client.health_check()? {
        eprintln!("Error: gitsim server is not running!");
        eprintln!("Start it with: gitsim serve");
        return Ok(());
    }

    let seed = SeedState {
        branches: vec!["main".to_string(), "feature".to_string()],
        commits: vec![
            SeedCommit::new("main", "Initial commit"),
            SeedCommit::new("feature", "Add login form"),
        ],
        ..SeedState::default()
    };
    let session = client.create_seeded_session(&seed)?;
    println!("Session {} started on '{}'", session.id(), session.initial_state().current_branch());
    println!();

    let solution = [
        "git status",
        "git merge feature",
        "git log --oneline --graph",
    ];
    for entry in session.run_all(solution)? {
        match entry.kind {
            LogKind::Error => eprintln!("{}", entry.message),
            _ => println!("{}", entry.message),
        }
    }

    let state = session.state()?;
    let merged = state.commits_on("main").any(|c| c.is_merge());
    println!();
    println!("Challenge {}", if merged { "passed" } else { "not passed yet" });

    session.close()?;
    Ok(())
}
