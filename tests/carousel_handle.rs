use folio_carousel::carousel::{CarouselCommand, CarouselError, CarouselHandle, CarouselInput, NavKey};
use folio_carousel::config::CarouselSettings;
use folio_carousel::content::{portfolio, CodeSnippet, Slide};
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};

const INTERVAL: Duration = Duration::from_millis(6000);

fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| {
            CodeSnippet {
                title: format!("slide {}", i),
                language: None,
                code: String::new(),
            }
            .into()
        })
        .collect()
}

fn spawn(n: usize) -> CarouselHandle {
    CarouselHandle::spawn("test", slides(n), &CarouselSettings::with_interval_ms(6000)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn autoplay_retreat_and_hover_scenario() {
    let mut handle = spawn(3);
    let mut rx = handle.subscribe();
    let start = Instant::now();

    // first tick
    rx.wait_for(|s| s.index == Some(1)).await.unwrap();
    assert!(start.elapsed() >= INTERVAL);

    // manual retreat mid-cycle resets the schedule
    sleep(Duration::from_millis(2500)).await;
    handle.retreat().await.unwrap();
    let manual = Instant::now();
    rx.wait_for(|s| s.index == Some(0)).await.unwrap();

    rx.wait_for(|s| s.index == Some(1)).await.unwrap();
    assert!(manual.elapsed() >= INTERVAL);

    // hover in pauses, whatever the elapsed time
    handle.input(CarouselInput::PointerEnter).await.unwrap();
    rx.wait_for(|s| !s.autoplay).await.unwrap();
    assert!(!handle.snapshot().timer_live);
    sleep(Duration::from_secs(120)).await;
    assert_eq!(handle.snapshot().index, Some(1));

    // hover out resumes without firing immediately
    handle.input(CarouselInput::PointerLeave).await.unwrap();
    let resumed = Instant::now();
    rx.wait_for(|s| s.autoplay).await.unwrap();
    assert_eq!(handle.snapshot().index, Some(1));

    rx.wait_for(|s| s.index == Some(2)).await.unwrap();
    assert!(resumed.elapsed() >= INTERVAL);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn command_runs_before_a_tick_due_at_the_same_instant() {
    let mut handle = spawn(3);
    let mut rx = handle.subscribe();
    let start = Instant::now();

    // let the task park on its first deadline
    tokio::task::yield_now().await;
    tokio::time::advance(INTERVAL).await;
    handle.try_send(CarouselCommand::JumpTo(0)).unwrap();

    // the jump to the current slide publishes nothing, a fired tick would
    sleep_until(start + INTERVAL * 2 - Duration::from_millis(1)).await;
    assert!(!rx.has_changed().unwrap());
    assert_eq!(handle.snapshot().index, Some(0));

    rx.wait_for(|s| s.index == Some(1)).await.unwrap();
    assert!(start.elapsed() >= INTERVAL * 2);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn disabled_autoplay_never_advances() {
    let mut handle = spawn(4);
    handle.set_autoplay(false).await.unwrap();
    let mut rx = handle.subscribe();
    rx.wait_for(|s| !s.autoplay).await.unwrap();

    sleep(INTERVAL * 20).await;
    assert_eq!(handle.snapshot().index, Some(0));

    // manual navigation still works while paused
    handle.input(CarouselInput::Key(NavKey::Left)).await.unwrap();
    rx.wait_for(|s| s.index == Some(3)).await.unwrap();
    assert!(!handle.snapshot().autoplay);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn out_of_range_jump_is_ignored() {
    let mut handle = spawn(3);
    let mut rx = handle.subscribe();

    handle.jump_to(2).await.unwrap();
    rx.wait_for(|s| s.index == Some(2)).await.unwrap();

    handle.jump_to(3).await.unwrap();
    handle.jump_to(usize::MAX).await.unwrap();
    handle.set_autoplay(false).await.unwrap();
    rx.wait_for(|s| !s.autoplay).await.unwrap();
    assert_eq!(handle.snapshot().index, Some(2));

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn nothing_changes_after_shutdown() {
    let mut handle = spawn(3);
    let mut rx = handle.subscribe();
    handle.shutdown().await.unwrap();
    let last = handle.snapshot();

    assert!(handle.is_disposed());
    assert!(matches!(handle.advance().await, Err(CarouselError::Disposed(_))));
    assert!(matches!(
        handle.try_send(CarouselCommand::Retreat),
        Err(CarouselError::Disposed(_))
    ));

    sleep(INTERVAL * 10).await;
    assert_eq!(handle.snapshot(), last);
    // the task dropped its sender, no further snapshot can arrive
    assert!(rx.changed().await.is_err());

    // second shutdown is a no-op
    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_task() {
    let handle = spawn(3);
    let mut rx = handle.subscribe();
    drop(handle);

    assert!(rx.changed().await.is_err());
    assert_eq!(rx.borrow().index, Some(0));
}

#[tokio::test(start_paused = true)]
async fn single_slide_never_starts_a_timer() {
    let mut handle = spawn(1);
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.index, Some(0));
    assert!(!snapshot.timer_live);
    assert!(!snapshot.has_navigation());

    handle.advance().await.unwrap();
    handle.retreat().await.unwrap();
    sleep(Duration::from_secs(3600)).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.index, Some(0));
    assert!(!snapshot.timer_live);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn empty_list_is_inert() {
    let mut handle = spawn(0);
    handle.advance().await.unwrap();
    handle.input(CarouselInput::Indicator(0)).await.unwrap();
    sleep(INTERVAL * 3).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.index, None);
    assert!(snapshot.slide.is_none());
    assert_eq!(snapshot.position_label(), None);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn replacing_slides_clamps_the_cursor() {
    let mut handle = spawn(5);
    let mut rx = handle.subscribe();

    handle.jump_to(4).await.unwrap();
    rx.wait_for(|s| s.index == Some(4)).await.unwrap();

    handle
        .send(CarouselCommand::ReplaceSlides(portfolio::experiences()))
        .await
        .unwrap();
    rx.wait_for(|s| s.len == 3).await.unwrap();
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.index, Some(2));
    assert!(matches!(snapshot.slide, Some(Slide::Experience(_))));

    handle
        .send(CarouselCommand::ReplaceSlides(Vec::new()))
        .await
        .unwrap();
    rx.wait_for(|s| s.len == 0).await.unwrap();
    assert!(!handle.snapshot().timer_live);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn zero_interval_is_rejected() {
    let settings = CarouselSettings::with_interval_ms(0);
    let result = CarouselHandle::spawn("broken", slides(3), &settings);
    assert!(matches!(result, Err(CarouselError::InvalidSettings(_))));
}
