//! `ct-epidemic` — contagion dynamics over a fixed network.
//!
//! All operations are pure: they read a node slice and return the next
//! generation as a fresh `Vec<Node>`, drawing randomness from the `SimRng`
//! the caller injects.  The previous generation is never touched, so a
//! caller may keep any number of old generations around for replay or
//! display.
//!
//! | Function                     | Role                                        |
//! |------------------------------|---------------------------------------------|
//! | [`simulation_tick`]          | advance every node by one tick              |
//! | [`apply_fact_check`]         | targeted intervention on one node           |
//! | [`apply_awareness_campaign`] | mass intervention on 20 % of healthy nodes  |
//! | [`get_stats`]                | per-state counts for one generation         |

pub mod intervention;
pub mod stats;
pub mod tick;


pub use intervention::{
    CAMPAIGN_FRACTION, FACT_CHECK_AWARENESS_PROBABILITY, Intervention, apply_awareness_campaign,
    apply_fact_check,
};
pub use stats::{StatsSnapshot, get_stats};
pub use tick::simulation_tick;
