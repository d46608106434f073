use super::*;

#[test]
fn hidden_in_quiet_mode_still_counts() {
    let progress = ScanProgress::new(true);
    progress.inc();
    progress.inc();

    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn hidden_without_tty() {
    let progress = ScanProgress::new_with_visibility(false, false);
    progress.inc();
    progress.finish();
}

#[test]
fn visible_spinner_path_does_not_panic() {
    let progress = ScanProgress::new_with_visibility(false, true);
    for _ in 0..5 {
        progress.inc();
    }

    assert_eq!(progress.position(), 5);
    progress.finish();
}

#[test]
fn clones_share_the_count() {
    let progress = ScanProgress::new(true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
}
