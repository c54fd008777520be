/// Run state of the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl RunState {
    pub fn name(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Finished => "finished",
        }
    }
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    /// One synchronous sample outside continuous running.
    Step,
    /// The clock reached the end of the event.
    Complete,
}

/// Next state for `command` in `state`, or `None` when the command does
/// not apply there. Side effects (rewinding, clearing) belong to the caller.
///
/// ```text
///   Idle     --Start-->    Running
///   Finished --Start-->    Running   (rewinds first)
///   Running  --Pause-->    Paused
///   Paused   --Resume-->   Running
///   Running  --Complete--> Finished
///   Paused   --Complete--> Finished
///   !Running --Step-->     Paused
///   *        --Reset-->    Idle
/// ```
pub fn transition(state: RunState, command: Command) -> Option<RunState> {
    use Command::*;
    use RunState::*;

    match (state, command) {
        (_, Reset) => Some(Idle),
        (Idle | Finished, Start) => Some(Running),
        (Running, Pause) => Some(Paused),
        (Paused, Resume) => Some(Running),
        (Running | Paused, Complete) => Some(Finished),
        (Idle | Paused | Finished, Step) => Some(Paused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [RunState; 4] = [
        RunState::Idle,
        RunState::Running,
        RunState::Paused,
        RunState::Finished,
    ];

    #[test]
    fn test_reset_from_anywhere() {
        for state in ALL_STATES {
            assert_eq!(transition(state, Command::Reset), Some(RunState::Idle));
        }
    }

    #[test]
    fn test_start_only_from_idle_or_finished() {
        assert_eq!(transition(RunState::Idle, Command::Start), Some(RunState::Running));
        assert_eq!(
            transition(RunState::Finished, Command::Start),
            Some(RunState::Running)
        );
        assert_eq!(transition(RunState::Running, Command::Start), None);
        assert_eq!(transition(RunState::Paused, Command::Start), None);
    }

    #[test]
    fn test_pause_resume_pair() {
        assert_eq!(transition(RunState::Running, Command::Pause), Some(RunState::Paused));
        assert_eq!(transition(RunState::Paused, Command::Resume), Some(RunState::Running));
        assert_eq!(transition(RunState::Idle, Command::Pause), None);
        assert_eq!(transition(RunState::Running, Command::Resume), None);
    }

    #[test]
    fn test_step_not_while_running() {
        assert_eq!(transition(RunState::Running, Command::Step), None);
        for state in [RunState::Idle, RunState::Paused, RunState::Finished] {
            assert_eq!(transition(state, Command::Step), Some(RunState::Paused));
        }
    }

    #[test]
    fn test_complete_only_while_advancing() {
        assert_eq!(
            transition(RunState::Running, Command::Complete),
            Some(RunState::Finished)
        );
        assert_eq!(transition(RunState::Idle, Command::Complete), None);
        assert_eq!(transition(RunState::Finished, Command::Complete), None);
    }
}
