/// Estado de la sesión de escaneo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScannerState {
    #[default]
    Idle,
    Starting,
    Scanning,
    Stopping,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScannerEvent {
    StartRequested,
    Started,
    StartFailed,
    StopRequested,
    Stopped,
}

impl ScannerState {
    /// Siguiente estado, o `None` si la transición no es válida
    pub fn next(self, event: ScannerEvent) -> Option<ScannerState> {
        use ScannerEvent::*;
        use ScannerState::*;

        match (self, event) {
            (Idle, StartRequested) => Some(Starting),
            (Starting, Started) => Some(Scanning),
            (Starting, StartFailed) => Some(Idle),
            (Scanning, StopRequested) => Some(Stopping),
            (Stopping, Stopped) => Some(Idle),
            // stop() sin sesión es un no-op
            (Idle, StopRequested) => Some(Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScannerEvent::*;

    #[test]
    fn test_happy_path_cycle() {
        let state = ScannerState::default();
        let state = state.next(StartRequested).unwrap();
        assert_eq!(state, ScannerState::Starting);

        let state = state.next(Started).unwrap();
        assert_eq!(state, ScannerState::Scanning);

        let state = state.next(StopRequested).unwrap().next(Stopped).unwrap();
        assert_eq!(state, ScannerState::Idle);
    }

    #[test]
    fn test_start_failure_returns_to_idle() {
        let state = ScannerState::Starting.next(StartFailed).unwrap();
        assert_eq!(state, ScannerState::Idle);
    }

    #[test]
    fn test_second_start_is_rejected_while_camera_is_held() {
        assert_eq!(ScannerState::Starting.next(StartRequested), None);
        assert_eq!(ScannerState::Scanning.next(StartRequested), None);
        assert_eq!(ScannerState::Stopping.next(StartRequested), None);
    }

    #[test]
    fn test_stop_is_idempotent_when_idle() {
        let state = ScannerState::Idle.next(StopRequested).unwrap();
        let state = state.next(StopRequested).unwrap();
        assert_eq!(state, ScannerState::Idle);
    }
}
