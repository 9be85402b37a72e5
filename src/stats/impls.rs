pub mod client_stats_atomics;
