use std::str::FromStr;

/// Parse `x,y,z` into a 3-tuple. Used by the CLI to accept world-space
/// points such as `--from=-65.0,110.0,60.0`.
pub fn parse_triplet<T>(s: &str) -> Result<(T, T, T), String>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').collect::<Vec<_>>();
    if v.len() != 3 {
        return Err(format!("expected three comma-separated values, got `{s}`"));
    }
    let parse = |t: &str| t.trim().parse::<T>().map_err(|e| format!("`{t}`: {e}"));
    Ok((parse(v[0])?, parse(v[1])?, parse(v[2])?))
}

pub mod timing {

    use std::io::Write;
    use std::time::Instant;

    pub struct Progress {
        previous: Instant,
    }

    impl Progress {

        #[allow(clippy::new_without_default)]
        pub fn new() -> Self { Self { previous: Instant::now() } }

        /// Print message, append ellipsis, flush stdout, stay on same line, start timer.
        pub fn start(&mut self, message: &str) {
            print!("{message} ... ");
            std::io::stdout().flush().unwrap();
            self.start_timer();
        }

        // Print time elapsed since last start or done
        pub fn done(&mut self) {
            println!("{} ms", self.previous.elapsed().as_millis());
            self.start_timer();
        }

        fn start_timer(&mut self) { self.previous = Instant::now() }
    }
}
