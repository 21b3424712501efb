#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    /// Window of `flags.len()` days ending today; `flags[0]` is today.
    fn window(flags: &[bool]) -> StreakWindow {
        flags
            .iter()
            .enumerate()
            .map(|(offset, flag)| (today() - Duration::days(offset as i64), *flag))
            .collect()
    }

    #[test]
    fn test_empty_window_is_zero() {
        let result = compute_streaks(&StreakWindow::new(), today());
        assert_eq!(result, StreakResult { current: 0, best: 0 });
    }

    #[test]
    fn test_all_false_is_zero() {
        let result = compute_streaks(&window(&[false; 30]), today());
        assert_eq!(result, StreakResult { current: 0, best: 0 });
    }

    #[test]
    fn test_thirty_checked_in_days() {
        let result = compute_streaks(&window(&[true; 30]), today());
        assert_eq!(result, StreakResult { current: 29, best: 29 });
    }

    #[test]
    fn test_all_true_reports_window_size_minus_one() {
        for size in [1usize, 2, 7, 12, 45] {
            let flags = vec![true; size];
            let result = compute_streaks(&window(&flags), today());
            let expected = (size - 1) as u32;
            assert_eq!(result.current, expected, "size {}", size);
            assert_eq!(result.best, expected, "size {}", size);
        }
    }

    #[test]
    fn test_missing_today_does_not_break_streak() {
        // today unchecked, then a run of five
        let mut flags = vec![false, true, true, true, true, true, false];
        flags.extend([true; 3]);
        let result = compute_streaks(&window(&flags), today());
        assert_eq!(result.current, 4);
        assert_eq!(result.best, 4);
    }

    #[test]
    fn test_gap_before_yesterday_stops_current() {
        // today:false, yesterday:true, day-2:true, day-3:false, older:true
        let mut flags = vec![false, true, true, false];
        flags.extend([true; 26]);
        let result = compute_streaks(&window(&flags), today());
        assert_eq!(result.current, 1);
        assert_eq!(result.best, 25);
    }

    #[test]
    fn test_unchecked_yesterday_breaks_streak() {
        let result = compute_streaks(&window(&[true, false, true, true, true]), today());
        assert_eq!(result.current, 0);
        assert_eq!(result.best, 2);
    }

    #[test]
    fn test_today_outside_window_is_not_skipped() {
        // window ends yesterday; its newest day is unchecked and is not today
        let w: StreakWindow = (1..=5)
            .map(|offset| (today() - Duration::days(offset), offset != 1))
            .collect();
        let result = compute_streaks(&w, today());
        assert_eq!(result.current, 0);
        assert_eq!(result.best, 3);
    }

    #[test]
    fn test_compute_streaks_is_idempotent() {
        let w = window(&[true, true, false, true, false, true, true, true]);
        assert_eq!(compute_streaks(&w, today()), compute_streaks(&w, today()));
    }

    #[test]
    fn test_best_never_below_current() {
        let patterns: [&[bool]; 4] = [
            &[false, true, true, true],
            &[true, false, true],
            &[false, false, true],
            &[true, true, false, true, true, true, true],
        ];
        for flags in patterns {
            let result = compute_streaks(&window(flags), today());
            assert!(result.best >= result.current, "{:?}", flags);
        }
    }

    #[test]
    fn test_recent_days_always_seven_cells() {
        for w in [StreakWindow::new(), window(&[true; 30]), window(&[false; 3])] {
            let cells = build_recent_days(&w, today());
            assert_eq!(cells.len(), 7);
            assert!(cells[6].is_today);
            assert!(cells[..6].iter().all(|c| !c.is_today));
        }
    }

    #[test]
    fn test_recent_days_oldest_first_with_completion() {
        let cells = build_recent_days(&window(&[false, true, false, true]), today());
        let days: Vec<u32> = cells.iter().map(|c| c.day_of_month).collect();
        assert_eq!(days, vec![9, 10, 11, 12, 13, 14, 15]);

        let completed: Vec<bool> = cells.iter().map(|c| c.completed).collect();
        // dates older than the window default to false
        assert_eq!(
            completed,
            vec![false, false, false, true, false, true, false]
        );
    }

    #[test]
    fn test_recent_days_cross_month_boundary() {
        let first = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let cells = build_recent_days(&StreakWindow::new(), first);
        let days: Vec<u32> = cells.iter().map(|c| c.day_of_month).collect();
        assert_eq!(days, vec![24, 25, 26, 27, 28, 1, 2]);
        assert!(cells.iter().all(|c| !c.completed));
    }

    #[test]
    fn test_window_from_records_and_counts() {
        let w = StreakWindow::from_records(vec![
            CheckInRecord {
                date: today(),
                has_valid_check_in: true,
            },
            CheckInRecord {
                date: today() - Duration::days(1),
                has_valid_check_in: false,
            },
        ]);
        assert_eq!(w.len(), 2);
        assert_eq!(w.checked_in_days(), 1);
        assert!(w.is_checked_in(today()));
        assert!(!w.is_checked_in(today() - Duration::days(9)));
    }

    #[test]
    fn test_encouragement_tiers() {
        assert_eq!(
            message_for(0),
            "Start your journey today! Every expert was once a beginner."
        );
        assert_eq!(message_for(2), "Great start! You're building momentum.");
        assert_eq!(
            message_for(3),
            "Fantastic progress! Keep the momentum going."
        );
        assert_eq!(
            message_for(13),
            "Excellent work! You're forming a strong habit."
        );
        assert_eq!(
            message_for(14),
            "Amazing commitment! You have built a life-changing habit."
        );
        assert_eq!(
            message_for(21),
            "Incredible dedication! You're truly consistent."
        );
        assert_eq!(
            message_for(100),
            "Outstanding achievement! You're an inspiration to others."
        );
        assert_eq!(
            EncouragementTier::for_streak(u32::MAX),
            EncouragementTier::OutstandingAchievement
        );
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let mut previous = EncouragementTier::for_streak(0);
        for streak in 1..200 {
            let tier = EncouragementTier::for_streak(streak);
            assert!(tier >= previous);
            previous = tier;
        }
    }
}
