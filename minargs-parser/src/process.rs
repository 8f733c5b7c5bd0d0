//! Where user supplied arguments start in a process invocation.

/// Interpreter options after which user arguments directly follow the interpreter.
const EVAL_FLAGS: [&str; 4] = ["-e", "--eval", "-p", "--print"];

/// Describes what runs the program, which decides how many leading entries of the invocation
/// vector belong to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    exec_args: Vec<String>,
    embedded: bool,
    default_app: bool,
}

impl Host {
    /// A compiled executable. User arguments directly follow the program path.
    pub fn native() -> Self {
        Host {
            embedded: true,
            ..Default::default()
        }
    }

    /// An interpreter running a script, with the interpreter's own options.
    pub fn interpreter<I, S>(exec_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Host {
            exec_args: exec_args.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// An embedding host. Unless it runs its default (unbundled) app, user arguments directly
    /// follow the executable.
    pub fn embedded(default_app: bool) -> Self {
        Host {
            embedded: true,
            default_app,
            ..Default::default()
        }
    }

    /// Number of leading invocation entries that belong to the program.
    pub fn main_args(&self) -> usize {
        if self.embedded && !self.default_app {
            return 1;
        }

        if self
            .exec_args
            .iter()
            .any(|arg| EVAL_FLAGS.contains(&arg.as_str()))
        {
            return 1;
        }

        2
    }
}

/// A read-only snapshot of a process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
    host: Host,
}

impl Invocation {
    /// Create an invocation from an explicit vector.
    pub fn new<I, S>(argv: I, host: Host) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            argv: argv.into_iter().map(Into::into).collect(),
            host,
        }
    }

    /// Snapshot the running process. Arguments that are not valid unicode are converted lossily.
    pub fn current() -> Self {
        let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        Self::new(argv, Host::native())
    }

    /// Full invocation vector, program entries included.
    #[inline(always)]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// What runs the program.
    #[inline(always)]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Position of the first user supplied argument, clamped to the vector length.
    pub fn start(&self) -> usize {
        self.host.main_args().min(self.argv.len())
    }
}
