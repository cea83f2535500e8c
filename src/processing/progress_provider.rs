use std::time;

use log::trace;


/// Counts completed actions of a run and reports the percentage through
/// `log`, at most once per `MS_DELAY`.
pub struct ProgressProvider {
    all_actions_count: usize,
    completed_actions_count: usize,
    prev_time: time::Instant,
}

impl ProgressProvider {
    const MS_DELAY: u128 = 100;

    pub fn new(actions_count: usize) -> Self {
        ProgressProvider {
            all_actions_count: actions_count,
            completed_actions_count: 0,
            prev_time: time::Instant::now(),
        }
    }

    pub fn complete_action(&mut self) {
        debug_assert!(self.completed_actions_count < self.all_actions_count,
            "completed more than {} declared actions", self.all_actions_count);

        self.completed_actions_count += 1;

        if self.prev_time.elapsed().as_millis() > Self::MS_DELAY {
            self.prev_time = time::Instant::now();
            trace!("progress {}%", self.percents());
        }
    }

    pub fn percents(&self) -> usize {
        if self.all_actions_count == 0 {
            return 100;
        }
        self.completed_actions_count * 100 / self.all_actions_count
    }

    pub fn all_actions_completed(&self) -> bool {
        self.all_actions_count == self.completed_actions_count
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressProvider;

    #[test]
    fn counts_actions() {
        let mut prog_prov = ProgressProvider::new(4);
        assert_eq!(prog_prov.percents(), 0);

        prog_prov.complete_action();
        assert_eq!(prog_prov.percents(), 25);
        assert!(!prog_prov.all_actions_completed());

        for _ in 0..3 {
            prog_prov.complete_action();
        }
        assert_eq!(prog_prov.percents(), 100);
        assert!(prog_prov.all_actions_completed());
    }

    #[test]
    fn nothing_to_do_is_done() {
        let prog_prov = ProgressProvider::new(0);
        assert!(prog_prov.all_actions_completed());
        assert_eq!(prog_prov.percents(), 100);
    }

    #[test]
    #[should_panic(expected = "completed more than")]
    #[cfg(debug_assertions)]
    fn overrun_is_caught() {
        let mut prog_prov = ProgressProvider::new(1);
        prog_prov.complete_action();
        prog_prov.complete_action();
    }
}
