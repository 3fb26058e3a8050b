/// Discrete playback commands delivered by the Input collaborator, each
/// firing at most once per invocation cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationCommand {
    /// Begin a fresh run from frame 0 with an empty trail.
    Start,
    /// Freeze playback; the current frame stays on screen.
    Pause,
    /// Continue a paused run from where it stopped.
    Resume,
    /// Abandon the run and fall back to the static view.
    Stop,
    /// Begin a fresh run that restarts itself on completion until stopped.
    Repeat,
}
