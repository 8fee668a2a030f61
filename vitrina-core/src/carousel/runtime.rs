//! A single carousel hosted as a tokio task.
//!
//! The task owns the [`CarouselInstance`] and its [`AutoplayTimer`]. Input,
//! content and timer ticks are serialized through one `select!` loop, so a
//! transition always sees the effects of the one before it. Renderers
//! observe the latest [`CarouselSnapshot`] through a `watch` channel.

use std::fmt;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use vitrina_model::CarouselItem;

use super::autoplay::AutoplayTimer;
use super::bindings::InputEvent;
use super::config::CarouselConfig;
use super::instance::{CarouselInstance, NavigationRequest};
use super::messages::CarouselMessage;
use super::types::CarouselKey;
use super::view::CarouselSnapshot;
use crate::error::CarouselError;
use crate::loader::LoadState;

enum Envelope<T> {
    Message(CarouselMessage<T>),
    /// Reply with the snapshot once everything queued before it is applied.
    Flush(oneshot::Sender<CarouselSnapshot>),
}

/// Owner side of a running carousel. Dropping it stops the task.
pub struct CarouselHandle<T> {
    key: CarouselKey,
    mailbox: mpsc::UnboundedSender<Envelope<T>>,
    snapshot: watch::Receiver<CarouselSnapshot>,
    requests: mpsc::UnboundedReceiver<NavigationRequest>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<T> fmt::Debug for CarouselHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("key", &self.key)
            .field("item_type", &std::any::type_name::<T>())
            .field("mailbox_closed", &self.mailbox.is_closed())
            .field("shutdown_cancelled", &self.shutdown.is_cancelled())
            .finish()
    }
}

/// Start a carousel on the current tokio runtime.
///
/// The carousel begins in the loading state; feed it content with
/// [`CarouselHandle::content`] or by forwarding a loader's watch channel.
pub fn spawn_carousel<T>(key: CarouselKey, config: CarouselConfig) -> CarouselHandle<T>
where
    T: CarouselItem + Send + 'static,
{
    let (mailbox_tx, mailbox_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(CarouselSnapshot::empty(key.clone()));
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();

    let instance = CarouselInstance::new(key.clone(), &config);
    let task = tokio::spawn(run_carousel(
        instance,
        config,
        mailbox_rx,
        snapshot_tx,
        request_tx,
        shutdown.clone(),
    ));
    log::debug!("Spawned carousel {key}");

    CarouselHandle {
        key,
        mailbox: mailbox_tx,
        snapshot: snapshot_rx,
        requests: request_rx,
        shutdown,
        task: Some(task),
    }
}

async fn run_carousel<T: CarouselItem>(
    mut instance: CarouselInstance<T>,
    config: CarouselConfig,
    mut mailbox: mpsc::UnboundedReceiver<Envelope<T>>,
    snapshot: watch::Sender<CarouselSnapshot>,
    requests: mpsc::UnboundedSender<NavigationRequest>,
    shutdown: CancellationToken,
) {
    let mut timer = AutoplayTimer::new();

    loop {
        let message = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            envelope = mailbox.recv() => match envelope {
                Some(Envelope::Message(message)) => message,
                Some(Envelope::Flush(reply)) => {
                    let _ = reply.send(snapshot.borrow().clone());
                    continue;
                }
                None => break,
            },
            generation = timer.tick() => CarouselMessage::Tick(generation),
        };

        let outcome = instance.update(message);
        timer.apply(outcome.timer, config.interval);
        if let Some(request) = outcome.request
            && requests.send(request).is_err()
        {
            log::debug!("Carousel {} has no navigation listener", instance.key());
        }
        if outcome.changed {
            snapshot.send_replace(instance.snapshot(&config.projection));
        }
    }

    let action = instance.teardown();
    timer.apply(action, config.interval);
    log::debug!("Carousel {} stopped", instance.key());
}

impl<T> CarouselHandle<T> {
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn send(&self, message: CarouselMessage<T>) -> Result<(), CarouselError> {
        self.mailbox
            .send(Envelope::Message(message))
            .map_err(|_| CarouselError::Closed(self.key.clone()))
    }

    /// Wait until every message sent so far has been applied and return
    /// the resulting snapshot.
    pub async fn flush(&self) -> Result<CarouselSnapshot, CarouselError> {
        let (reply, done) = oneshot::channel();
        self.mailbox
            .send(Envelope::Flush(reply))
            .map_err(|_| CarouselError::Closed(self.key.clone()))?;
        done.await.map_err(|_| CarouselError::Closed(self.key.clone()))
    }

    pub fn input(&self, event: InputEvent) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Input(event))
    }

    pub fn content(&self, state: LoadState<Vec<T>>) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Content(state))
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshot.clone()
    }

    /// Wait for the next navigation request (e.g. a hero slide was opened).
    pub async fn next_request(&mut self) -> Option<NavigationRequest> {
        self.requests.recv().await
    }

    pub fn try_next_request(&mut self) -> Option<NavigationRequest> {
        self.requests.try_recv().ok()
    }

    /// Stop the task and wait for it to finish tearing down.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
        {
            log::warn!("Carousel {} task failed: {error}", self.key);
        }
    }
}

impl<T: Send + 'static> CarouselHandle<T> {
    /// Feed every state a loader publishes into this carousel, mapped to
    /// the item list. Stops when the loader settles for good or the
    /// carousel shuts down.
    pub fn follow<D, F>(
        &self,
        mut source: watch::Receiver<LoadState<D>>,
        map: F,
    ) -> JoinHandle<()>
    where
        D: Clone + Send + Sync + 'static,
        F: Fn(LoadState<D>) -> LoadState<Vec<T>> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            loop {
                let state = source.borrow_and_update().clone();
                let message = CarouselMessage::Content(map(state));
                if mailbox.send(Envelope::Message(message)).is_err() {
                    break;
                }
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => break,
                    changed = source.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        })
    }
}

impl<T> Drop for CarouselHandle<T> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
