#[derive(Debug, Clone, Copy, Default)]
pub struct RunMode {
    pub dry_run: bool,
    pub assume_yes: bool,
    pub verbose: bool,
}
