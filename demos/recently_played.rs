use recentkit::RecentlyPlayed;

fn main() {
    let mut store = RecentlyPlayed::new(3);

    for song in ["S1", "S2", "S3", "S4", "S2", "S1"] {
        store.insert("User".to_string(), song.to_string());
    }

    if let Some(song) = store.get_and_promote("User") {
        println!("{}", song);
    }

    store.insert("User".to_string(), "S5".to_string());

    if let Some(song) = store.get_and_promote("User") {
        println!("{}", song);
    }

    for user in ["alice", "bob", "carol", "dave"] {
        store.insert(user.to_string(), format!("{}-song", user));
    }

    println!("users: {:?}", store.keys().collect::<Vec<_>>());
    println!("User still tracked? {}", store.contains("User"));
}

// Expected output:
// S1
// S5
// users: ["dave", "carol", "bob"]
// User still tracked? false
//
// Explanation: a single key is refreshed, never duplicated, so the store holds
// one entry until distinct users arrive. With capacity=3, inserting four new
// users evicts "User" and then "alice", the least recently used keys.
