//! Carousel Handle - runs a controller in its own tokio task
//!
//! The handle plays the part of the host runtime: it owns the event loop that
//! delivers timer ticks and UI commands to one [`CarouselController`], and it
//! publishes a [`CarouselSnapshot`] after every change.
//!
//! ```text
//! UI ─[CarouselCommand]→ carousel task ─[CarouselSnapshot]→ UI
//!     (mpsc::channel(64))   │  ▲            (watch)
//!                           ▼  │
//!                       sleep_until(next tick)
//! ```
//!
//! The task loop is biased: cancellation first, then commands, then the
//! timer. A command that is ready at the same time as a tick therefore
//! reschedules the timer before the tick is looked at, and the tick it
//! replaced is dropped by generation.

use crate::carousel::controller::{CarouselController, CarouselSnapshot, Disposed, Mounted};
use crate::carousel::error::CarouselError;
use crate::carousel::input::CarouselInput;
use crate::carousel::timer::TimerTick;
use crate::config::CarouselSettings;
use crate::content::Slide;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const COMMAND_BUFFER: usize = 64;

/// Commands accepted by a running carousel task
#[derive(Debug, Clone)]
pub enum CarouselCommand {
    Advance,
    Retreat,
    JumpTo(usize),
    SetAutoplay(bool),
    Input(CarouselInput),
    ReplaceSlides(Vec<Slide>),
}

impl From<CarouselInput> for CarouselCommand {
    fn from(input: CarouselInput) -> Self {
        CarouselCommand::Input(input)
    }
}

fn apply(controller: &mut CarouselController<Mounted>, command: CarouselCommand, now: Instant) {
    match command {
        CarouselCommand::Advance => controller.advance(now),
        CarouselCommand::Retreat => controller.retreat(now),
        CarouselCommand::JumpTo(index) => controller.jump_to(index, now),
        CarouselCommand::SetAutoplay(enabled) => controller.set_autoplay(enabled, now),
        CarouselCommand::Input(input) => controller.handle_input(input, now),
        CarouselCommand::ReplaceSlides(slides) => controller.replace_slides(slides, now),
    }
}

/// Resolves at the tick's deadline; never resolves without a live timer.
async fn wait_for_tick(tick: Option<TimerTick>) -> TimerTick {
    match tick {
        Some(tick) => {
            sleep_until(tick.deadline).await;
            tick
        }
        None => std::future::pending().await,
    }
}

async fn run_carousel(
    mut controller: CarouselController<Mounted>,
    mut commands: mpsc::Receiver<CarouselCommand>,
    snapshots: watch::Sender<CarouselSnapshot>,
    cancel: CancellationToken,
) -> CarouselController<Disposed> {
    debug!("Carousel task '{}' started", controller.name());

    loop {
        let tick = controller.next_tick();

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("Cancellation received for carousel '{}'", controller.name());
                break;
            }

            command = commands.recv() => match command {
                Some(command) => apply(&mut controller, command, Instant::now()),
                None => {
                    debug!("Command channel closed for carousel '{}'", controller.name());
                    break;
                }
            },

            fired = wait_for_tick(tick) => {
                controller.fire(fired.generation, Instant::now());
            }
        }

        let next = controller.snapshot();
        snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    controller.dispose()
}

/// Handle to a carousel running in a background task
///
/// Each handle owns exactly one controller, and with it the only timer that
/// can advance it. Dropping the handle cancels the task; [`shutdown`] also
/// waits for it to finish.
///
/// [`shutdown`]: CarouselHandle::shutdown
#[derive(Debug)]
pub struct CarouselHandle {
    name: String,
    command_sender: mpsc::Sender<CarouselCommand>,
    snapshot_receiver: watch::Receiver<CarouselSnapshot>,
    cancel: CancellationToken,
    task_handle: Option<JoinHandle<Option<usize>>>,
}

impl CarouselHandle {
    /// Mounts a controller over `slides` and spawns its task.
    ///
    /// Must be called from inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`CarouselError::InvalidSettings`] if the interval is zero.
    pub fn spawn(
        name: impl Into<String>,
        slides: Vec<Slide>,
        settings: &CarouselSettings,
    ) -> Result<Self, CarouselError> {
        settings.validate()?;
        let name = name.into();

        let controller = CarouselController::mount(name.clone(), slides, settings, Instant::now());
        let (command_sender, command_receiver) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_sender, snapshot_receiver) = watch::channel(controller.snapshot());
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        let task_handle = tokio::spawn(async move {
            let disposed =
                run_carousel(controller, command_receiver, snapshot_sender, task_cancel).await;
            disposed.current_index()
        });
        info!("Carousel '{}' spawned", name);

        Ok(Self {
            name,
            command_sender,
            snapshot_receiver,
            cancel,
            task_handle: Some(task_handle),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshot_receiver.clone()
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.snapshot_receiver.borrow().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled() || self.command_sender.is_closed()
    }

    pub async fn send(&self, command: CarouselCommand) -> Result<(), CarouselError> {
        if self.is_disposed() {
            return Err(CarouselError::Disposed(self.name.clone()));
        }
        self.command_sender
            .send(command)
            .await
            .map_err(|_| CarouselError::Disposed(self.name.clone()))
    }

    /// Non-blocking send for the egui frame loop.
    pub fn try_send(&self, command: CarouselCommand) -> Result<(), CarouselError> {
        if self.is_disposed() {
            return Err(CarouselError::Disposed(self.name.clone()));
        }
        self.command_sender.try_send(command).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => {
                warn!("Command buffer full for carousel '{}'", self.name);
                CarouselError::ChannelError(format!("command buffer full for '{}'", self.name))
            }
            mpsc::error::TrySendError::Closed(_) => CarouselError::Disposed(self.name.clone()),
        })
    }

    pub async fn advance(&self) -> Result<(), CarouselError> {
        self.send(CarouselCommand::Advance).await
    }

    pub async fn retreat(&self) -> Result<(), CarouselError> {
        self.send(CarouselCommand::Retreat).await
    }

    pub async fn jump_to(&self, index: usize) -> Result<(), CarouselError> {
        self.send(CarouselCommand::JumpTo(index)).await
    }

    pub async fn set_autoplay(&self, enabled: bool) -> Result<(), CarouselError> {
        self.send(CarouselCommand::SetAutoplay(enabled)).await
    }

    pub async fn input(&self, input: CarouselInput) -> Result<(), CarouselError> {
        self.send(input.into()).await
    }

    /// Cancels the task and waits until the controller is disposed.
    pub async fn shutdown(&mut self) -> Result<(), CarouselError> {
        debug!("Sending shutdown signal to carousel '{}'", self.name);
        self.cancel.cancel();

        if let Some(handle) = self.task_handle.take() {
            match handle.await {
                Ok(final_index) => {
                    info!(
                        "Carousel '{}' shut down at index {:?}",
                        self.name, final_index
                    );
                    Ok(())
                }
                Err(e) => {
                    error!("Carousel task '{}' failed: {}", self.name, e);
                    Err(CarouselError::TaskError(format!(
                        "carousel task '{}' failed: {}",
                        self.name, e
                    )))
                }
            }
        } else {
            debug!("Carousel '{}' already shut down", self.name);
            Ok(())
        }
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
