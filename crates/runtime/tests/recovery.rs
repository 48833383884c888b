//! Cross-session recovery over the file-backed store.

use std::time::Duration;

use tokio::time::timeout;

use game_core::{BoardId, HiscoreEntry, RotationMove, TileRect};
use runtime::{Channel, FileStore, MemoryChannel, RowStatus, Runtime, topics};

fn board() -> BoardId {
    BoardId::new("13")
}

fn solution() -> Vec<RotationMove> {
    vec![
        RotationMove::new(TileRect::new(0, 0, 1, 1), true),
        RotationMove::new(TileRect::new(1, 1, 2, 2), false),
        RotationMove::new(TileRect::new(0, 0, 2, 1), true),
    ]
}

#[tokio::test]
async fn restart_republishes_and_restores_pending() {
    let dir = tempfile::tempdir().unwrap();

    // First session: commit an entry, then shut down. The loopback channel
    // has no server behind it, so the entry stays pending.
    {
        let runtime = Runtime::builder()
            .channel(MemoryChannel::new())
            .store(FileStore::new(dir.path()).unwrap())
            .build()
            .unwrap();

        let handle = runtime.open(board());
        handle.propose(solution()).await.unwrap();
        handle.set_draft_name("Zoe").await.unwrap();
        handle.commit().await.unwrap();

        drop(handle);
        runtime.shutdown().await.unwrap();
    }

    // Second session over the same directory: the pending entry is restored
    // and re-sent to the server as if the first session never ended.
    let channel = MemoryChannel::new();
    let mut submissions = channel.subscribe(&topics::submit(&board()));

    let runtime = Runtime::builder()
        .channel(channel.clone())
        .store(FileStore::new(dir.path()).unwrap())
        .build()
        .unwrap();
    let handle = runtime.open(board());

    let msg = timeout(Duration::from_secs(2), submissions.recv())
        .await
        .expect("timed out waiting for recovery re-send")
        .expect("channel closed");
    let resent: HiscoreEntry = serde_json::from_value(msg.payload.unwrap()).unwrap();
    assert_eq!(resent.name, "Zoe");
    assert_eq!(resent.move_count, 3);
    assert_eq!(resent.moves, solution());

    let rows = handle.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, RowStatus::Pending);
    assert_eq!(rows[0].entry.name, "Zoe");

    // The committed flag is per-session state, not persisted.
    assert!(!handle.draft_committed().await.unwrap());
}
