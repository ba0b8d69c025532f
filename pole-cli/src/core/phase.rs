/// Where the pole is within the per-step update protocol.
///
/// | phase           | commit                             | presync       | sync         | postsync        | finalize        |
/// |-----------------|------------------------------------|---------------|--------------|-----------------|-----------------|
/// | `AwaitingInput` | → `Accumulating` or `Idle`         | –             | –            | –               | –               |
/// | `Accumulating`  | –                                  | reset, stay   | → `Evaluating` | –             | –               |
/// | `Evaluating`    | –                                  | –             | –            | evaluate → `Idle` | –             |
/// | `Idle`          | –                                  | no-op         | no-op        | no-op           | → `AwaitingInput` |
///
/// Dashes are protocol violations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, derive_more::Display)]
pub enum Phase {
    /// The step has not been committed yet.
    #[default]
    #[display("awaiting input")]
    AwaitingInput,

    /// Recalculation is pending, and dependents may add their contributions.
    #[display("accumulating")]
    Accumulating,

    /// Contributions are in, the accumulators are read-only until evaluated.
    #[display("evaluating")]
    Evaluating,

    /// Nothing left to do in this step.
    #[display("idle")]
    Idle,
}
