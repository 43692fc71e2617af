//! Page ordering for each layout mode
//!
//! Every paginator is a pure function of its inputs. Each exposes a lazy
//! `*_sheets` iterator and a `paginate_*` wrapper that collects it into a
//! [`LayoutResult`](crate::layout::LayoutResult).

mod custom;
mod pair;
mod standard;

pub use custom::{CustomOrderPlan, custom_order_sheets, paginate_custom_order};
pub use pair::{paginate_pair, pair_sheets};
pub use standard::{paginate_standard, standard_sheets};
