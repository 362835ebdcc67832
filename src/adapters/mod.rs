//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                 |
//! |-------------|--------------|-----------------------------|
//! | `console`   | InputPort    | stdin, script files, memory |
//! |             | Console      | stdout or any `Write`       |
//! | `json_file` | ConfigPort   | JSON catalog / built-ins    |
//! | `log_sink`  | EventSink    | `log` facade (stderr)       |

pub mod console;
pub mod json_file;
pub mod log_sink;
