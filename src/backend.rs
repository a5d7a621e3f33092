//! Block-generation backend selection.
//!
//! Two implementations of the ISAAC block step exist, [`Backend::Unrolled`]
//! and [`Backend::Reference`]. They accept the same seeds and produce
//! bit-identical streams. The unrolled backend is preferred; a one-time
//! probe checks it against the reference on a fixed state and falls back
//! to the reference if they disagree. The probe result is memoised for
//! the lifetime of the process.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::random::generator;
use crate::random::state::{IsaacState, Results, RAND_SIZE};

/// Number of blocks the probe compares.
const PROBE_BLOCKS: usize = 4;

static ACTIVE: OnceLock<Backend> = OnceLock::new();

/// Implementation strategy for ISAAC block generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Four steps per iteration, accumulators held in locals.
    Unrolled,
    /// One step per iteration, operator chosen by index.
    Reference,
}

impl Backend {
    /// All backends, preferred first.
    pub const ALL: [Backend; 2] = [Backend::Unrolled, Backend::Reference];

    /// Stable lowercase name, also accepted by configuration.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Unrolled => "unrolled",
            Backend::Reference => "reference",
        }
    }

    /// Generates one block into `rsl` and advances `st`.
    #[inline]
    pub(crate) fn generate(self, st: &mut IsaacState, rsl: &mut Results) {
        match self {
            Backend::Unrolled => generator::unrolled(st, rsl),
            Backend::Reference => generator::reference(st, rsl),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the backend chosen by the process-wide probe.
///
/// The probe runs on first call only; later calls return the cached
/// result.
pub fn active_backend() -> Backend {
    *ACTIVE.get_or_init(|| {
        let backend = probe();
        debug!(backend = %backend, "isaac backend selected");
        backend
    })
}

/// Checks the unrolled backend against the reference.
///
/// Both backends run [`PROBE_BLOCKS`] blocks from the same populated state;
/// any difference in output, memory or accumulators selects the reference.
pub fn probe() -> Backend {
    let mut st_ref = probe_state();
    let mut st_unr = probe_state();
    let mut rsl_ref = [0u32; RAND_SIZE];
    let mut rsl_unr = [0u32; RAND_SIZE];

    for block in 0..PROBE_BLOCKS {
        Backend::Reference.generate(&mut st_ref, &mut rsl_ref);
        Backend::Unrolled.generate(&mut st_unr, &mut rsl_unr);

        let agree = rsl_ref == rsl_unr
            && st_ref.mm == st_unr.mm
            && (st_ref.aa, st_ref.bb, st_ref.cc) == (st_unr.aa, st_unr.bb, st_unr.cc);
        if !agree {
            warn!(block, "unrolled backend disagrees with reference, falling back");
            return Backend::Reference;
        }
    }
    Backend::Unrolled
}

/// Fixed, fully populated state used by [`probe`].
fn probe_state() -> IsaacState {
    let mut st = IsaacState::zeroed();
    let mut v: u32 = 0x6a09_e667;
    for w in st.mm.iter_mut() {
        v ^= v << 13;
        v ^= v >> 17;
        v ^= v << 5;
        *w = v;
    }
    st.aa = 0xbb67_ae85;
    st.bb = 0x3c6e_f372;
    st.cc = 0xa54f_f53a;
    st
}
