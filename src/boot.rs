//! Splash-screen loading: the vault scan (and the graph layout) runs on a worker thread
//! while the foreground keeps drawing the splash and polling input.

use crate::editor::EditorState;
use crate::errors::{AppError, AppResult};
use crate::graph_view::GraphView;
use crate::layout::ForceLayout;
use crate::tree::{SortMode, TreeView};
use crate::vault::scan_vault_until;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const TIPS: &[&str] = &[
    "CTRL + S saves the note you are editing.",
    "CTRL + G on a [[link]] jumps straight to that note.",
    "Linking to a note that does not exist yet creates it.",
    "CTRL + Q leaves the current screen.",
    "Press SPACE to flip through these tips.",
    "--link-tree -a sorts the tree alphabetically.",
    "--link-tree -q puts the best connected notes first.",
    "--link-graph draws every note of the vault as a dot.",
    "Bigger dots in the graph mean more links.",
    "Seven themes ship with the editor. Try --theme random.",
    "Notes are plain .md files. Any editor can open them.",
    "Subfolders are scanned too; only the file name matters for links.",
    "Set NOTEWEAVE__THEME to pick a theme for every session.",
    "--log-file writes a log you can tail from another terminal.",
    "-h opens the help screen at any time.",
];

/// Background work needed before a screen can open.
#[derive(Debug, Clone, PartialEq)]
pub enum PrecomputeRequest {
    Edit {
        note: PathBuf,
        vault: PathBuf,
    },
    LinkTree {
        vault: PathBuf,
        sort: SortMode,
    },
    LinkGraph {
        vault: PathBuf,
        width: u16,
        height: u16,
        iterations: usize,
        seed: Option<u64>,
    },
}

impl PrecomputeRequest {
    pub fn label(&self) -> &'static str {
        match self {
            PrecomputeRequest::Edit { .. } => "Loading Editor",
            PrecomputeRequest::LinkTree { .. } => "Loading Link Tree",
            PrecomputeRequest::LinkGraph { .. } => "Loading Graph",
        }
    }
}

#[derive(Debug)]
pub enum Precomputed {
    Edit(EditorState),
    LinkTree(TreeView),
    LinkGraph(GraphView),
}

/// Run the work for `request`, giving up with [`AppError::Cancelled`] once `cancel` is set.
pub fn precompute(request: PrecomputeRequest, cancel: &AtomicBool) -> AppResult<Precomputed> {
    match request {
        PrecomputeRequest::Edit { note, vault } => {
            let notes = scan_vault_until(&vault, cancel).ok_or(AppError::Cancelled)?;
            EditorState::open(note, vault, notes).map(Precomputed::Edit)
        }
        PrecomputeRequest::LinkTree { vault, sort } => {
            let notes = scan_vault_until(&vault, cancel).ok_or(AppError::Cancelled)?;
            Ok(Precomputed::LinkTree(TreeView::new(vault, notes, sort)))
        }
        PrecomputeRequest::LinkGraph {
            vault,
            width,
            height,
            iterations,
            seed,
        } => {
            let notes = scan_vault_until(&vault, cancel).ok_or(AppError::Cancelled)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let positions = ForceLayout::new(width, height)
                .with_iterations(iterations)
                .compute_until(&notes.outgoing, &mut rng, cancel)
                .ok_or(AppError::Cancelled)?;
            Ok(Precomputed::LinkGraph(GraphView::new(
                vault, notes, positions, width, height,
            )))
        }
    }
}

/// A precompute running on its own thread. The result arrives once through a
/// single-slot channel.
#[derive(Debug)]
pub struct BootTask {
    receiver: Receiver<AppResult<Precomputed>>,
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl BootTask {
    pub fn spawn(request: PrecomputeRequest) -> AppResult<Self> {
        let (sender, receiver) = mpsc::sync_channel(1);
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let handle = thread::Builder::new()
            .name("precompute".to_string())
            .spawn(move || {
                let result = precompute(request, &flag);
                // Nobody is listening any more after a cancel
                let _ = sender.send(result);
            })
            .map_err(AppError::Spawn)?;

        Ok(Self {
            receiver,
            cancel,
            handle: Some(handle),
        })
    }

    /// Non-blocking check for the result.
    pub fn try_take(&mut self) -> Option<AppResult<Precomputed>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AppError::TaskFailed)),
        }
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for BootTask {
    fn drop(&mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Precompute thread panicked");
            }
        }
    }
}

/// Splash state: animation, tip of the day and the pending task.
#[derive(Debug)]
pub struct BootScreen {
    pub label: &'static str,
    pub tip: &'static str,
    pub dots: usize,
    started: Instant,
    last_frame: Instant,
    min_duration: Duration,
    frame_interval: Duration,
    task: BootTask,
    result: Option<AppResult<Precomputed>>,
}

impl BootScreen {
    pub fn start<R: Rng>(
        request: PrecomputeRequest,
        min_duration: Duration,
        frame_interval: Duration,
        now: Instant,
        rng: &mut R,
    ) -> AppResult<Self> {
        let label = request.label();
        log::info!("{}", label);
        let task = BootTask::spawn(request)?;
        Ok(Self {
            label,
            tip: random_tip(rng),
            dots: 0,
            started: now,
            last_frame: now,
            min_duration,
            frame_interval,
            task,
            result: None,
        })
    }

    pub fn next_tip<R: Rng>(&mut self, rng: &mut R) {
        self.tip = random_tip(rng);
    }

    /// Advance the animation and pick up the result if it is ready.
    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_frame) >= self.frame_interval {
            self.dots = (self.dots + 1) % 4;
            self.last_frame = now;
        }
        if self.result.is_none() {
            self.result = self.task.try_take();
        }
    }

    /// The result, once both the task is done and the splash has been up long enough.
    pub fn finish(&mut self, now: Instant) -> Option<AppResult<Precomputed>> {
        if now.saturating_duration_since(self.started) < self.min_duration {
            return None;
        }
        self.result.take()
    }

    pub fn cancel(&self) {
        log::info!("Loading cancelled");
        self.task.cancel();
    }
}

fn random_tip<R: Rng>(rng: &mut R) -> &'static str {
    TIPS.choose(rng).copied().unwrap_or_default()
}
