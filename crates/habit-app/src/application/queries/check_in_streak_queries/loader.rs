use chrono::NaiveDate;
use futures::future::join_all;
use log::warn;
use std::time::Duration;

use habit_domain::calendar;
use habit_domain::check_in::CheckInRepository;
use habit_domain::shared::UserId;
use habit_domain::streak::StreakWindow;

/// Probe every date of the window concurrently and collect the flags.
pub async fn load_window(
    repo: &dyn CheckInRepository,
    user_id: &UserId,
    today: NaiveDate,
    window_days: u32,
    probe_timeout: Duration,
) -> StreakWindow {
    let dates = calendar::trailing_dates(today, window_days);

    let probes = dates.into_iter().map(|date| async move {
        let checked_in =
            match tokio::time::timeout(probe_timeout, repo.has_valid_check_in(user_id, date)).await
            {
                Ok(Ok(flag)) => flag,
                Ok(Err(e)) => {
                    warn!(
                        "[streak] probe failed user_id={} date={} err={}",
                        user_id, date, e
                    );
                    false
                }
                Err(_) => {
                    warn!(
                        "[streak] probe timed out user_id={} date={} after={}ms",
                        user_id,
                        date,
                        probe_timeout.as_millis()
                    );
                    false
                }
            };
        (date, checked_in)
    });

    join_all(probes).await.into_iter().collect()
}
