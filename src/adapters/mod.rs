//! Adapters — concrete implementations of the port traits that are not
//! output drivers.
//!
//! | Adapter  | Implements    | Connects to                 |
//! |----------|---------------|-----------------------------|
//! | `screen` | IndicatorPort | Simulated display LED panel |

pub mod screen;
