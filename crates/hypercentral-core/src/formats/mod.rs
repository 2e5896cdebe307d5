//! Reading hypergraph datasets and writing result arrays.
//!
//! - [`XgiJson`] - the XGI JSON hypergraph layout used by the benchmark datasets
//! - [`write_npy`] / [`read_npy`] - one-dimensional `f64` arrays in NumPy `.npy` form

mod npy;
mod xgi_json;

pub use npy::{read_npy, write_npy};
pub use xgi_json::{load_dataset, XgiJson};
