//! ISAAC block generation.
//!
//! Each call advances the state by one block and writes 256 fresh output
//! words. Two strategies are provided and must stay bit-identical:
//!
//! - [`reference`]: one pass over `0..256`, the shift operator selected
//!   by `i % 4`. Mirrors the published algorithm step by step.
//! - [`unrolled`]: two half-passes of four steps per iteration with the
//!   accumulators held in locals, so the shift direction and the
//!   partner index are fixed at each step.

use super::state::{IsaacState, Results, RAND_SIZE, RAND_SIZE_LEN};

/// Offset of the partner word mixed into `aa` at each step.
const MIDPOINT: usize = RAND_SIZE / 2;

/// Generates one block, straightforward form.
pub(crate) fn reference(st: &mut IsaacState, rsl: &mut Results) {
    st.cc = st.cc.wrapping_add(1);
    st.bb = st.bb.wrapping_add(st.cc);

    for (i, out) in rsl.iter_mut().enumerate() {
        let x = st.mm[i];
        st.aa = match i % 4 {
            0 => st.aa ^ (st.aa << 13),
            1 => st.aa ^ (st.aa >> 6),
            2 => st.aa ^ (st.aa << 2),
            _ => st.aa ^ (st.aa >> 16),
        };
        st.aa = st.mm[(i + MIDPOINT) % RAND_SIZE].wrapping_add(st.aa);

        let y = st.ind(x).wrapping_add(st.aa).wrapping_add(st.bb);
        st.mm[i] = y;
        st.bb = st.ind(y >> RAND_SIZE_LEN).wrapping_add(x);
        *out = st.bb;
    }
}

/// Generates one block, unrolled by four.
pub(crate) fn unrolled(st: &mut IsaacState, rsl: &mut Results) {
    st.cc = st.cc.wrapping_add(1);
    let mut a = st.aa;
    let mut b = st.bb.wrapping_add(st.cc);

    macro_rules! rngstep {
        ($i:expr, $partner:expr, $mix:expr) => {{
            let i = $i;
            let x = st.mm[i];
            a = (a ^ $mix).wrapping_add(st.mm[$partner]);
            let y = st.ind(x).wrapping_add(a).wrapping_add(b);
            st.mm[i] = y;
            b = st.ind(y >> RAND_SIZE_LEN).wrapping_add(x);
            rsl[i] = b;
        }};
    }

    for &(base, partner) in &[(0, MIDPOINT), (MIDPOINT, 0)] {
        for j in (0..MIDPOINT).step_by(4) {
            rngstep!(base + j, partner + j, a << 13);
            rngstep!(base + j + 1, partner + j + 1, a >> 6);
            rngstep!(base + j + 2, partner + j + 2, a << 2);
            rngstep!(base + j + 3, partner + j + 3, a >> 16);
        }
    }

    st.aa = a;
    st.bb = b;
}
