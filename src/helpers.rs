//! Derived views over fetched collections.
//!
//! Every function here is pure: inputs are borrowed, results are freshly
//! allocated, and sorts are stable so ties keep their input order.

use chrono::{DateTime, Days, Local, TimeZone, Utc};
use std::collections::HashMap;
use std::fmt::Display;

use crate::models::{Post, User};

/// Leaderboard size used when none is configured.
pub const DEFAULT_TOP_USERS: usize = 5;

/// Users ordered by `comment_count`, highest first.
pub fn sort_users_by_comment_count(users: &[User]) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| b.comment_count.cmp(&a.comment_count));
    sorted
}

/// The `count` users with the highest `comment_count`.
///
/// Returns fewer than `count` users when the input is smaller.
pub fn get_top_users(users: &[User], count: usize) -> Vec<User> {
    let mut sorted = sort_users_by_comment_count(users);
    sorted.truncate(count);
    sorted
}

/// Posts ordered by number of comments, highest first.
pub fn sort_posts_by_comment_count(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.comment_count().cmp(&a.comment_count()));
    sorted
}

/// Every post tied for the highest comment count.
///
/// Empty input gives an empty result. The tie set is returned in
/// comment-count order, which for a tie is input order.
pub fn get_trending_posts(posts: &[Post]) -> Vec<Post> {
    let sorted = sort_posts_by_comment_count(posts);
    let Some(max_comments) = sorted.first().map(Post::comment_count) else {
        return Vec::new();
    };

    sorted
        .into_iter()
        .filter(|post| post.comment_count() == max_comments)
        .collect()
}

/// Posts ordered by timestamp, most recent first.
pub fn sort_posts_by_timestamp(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Number of comments each user actually wrote across `posts`, keyed by user id.
///
/// This is independent of [`User::comment_count`], which drives the leaderboard.
pub fn count_comments_by_author(posts: &[Post]) -> HashMap<u64, usize> {
    let mut counts = HashMap::new();
    for comment in posts.iter().flat_map(|post| post.comments.iter()) {
        *counts.entry(comment.user.id).or_insert(0) += 1;
    }
    counts
}

/// Human label for a timestamp relative to `now`.
///
/// The timestamp is shown in `now`'s time zone:
///
/// - same calendar day as `now`: `14:05`
/// - later than seven calendar days before `now`, at `now`'s wall-clock
///   time: `Sat 14:05`
/// - anything older: `Oct 11, 2026`
pub fn format_date<Tz>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(&now.timezone());

    if local.date_naive() == now.date_naive() {
        return local.format("%H:%M").to_string();
    }

    let one_week_ago = now.naive_local().checked_sub_days(Days::new(7));
    if one_week_ago.is_some_and(|boundary| local.naive_local() > boundary) {
        return local.format("%a %H:%M").to_string();
    }

    local.format("%b %-d, %Y").to_string()
}

/// [`format_date`] against the current local time.
pub fn format_date_now(timestamp: &DateTime<Utc>) -> String {
    format_date(timestamp, &Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;
    use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime};

    /// Central European time around the 2026 spring change
    /// (01:00 UTC on March 29th).
    #[derive(Debug, Clone, Copy)]
    struct Cet;

    impl Cet {
        fn switch_utc() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2026, 3, 29).unwrap().and_hms_opt(1, 0, 0).unwrap()
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for Cet {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Cet
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::switch_utc() + Duration::hours(1);
            let gap_end = gap_start + Duration::hours(1);
            if *local < gap_start {
                LocalResult::Single(Self::winter())
            } else if *local >= gap_end {
                LocalResult::Single(Self::summer())
            } else {
                LocalResult::None
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch_utc() {
                Self::winter()
            } else {
                Self::summer()
            }
        }
    }

    fn user(id: u64, count: u64) -> User {
        User::new(id, format!("user{}", id), format!("User {}", id), count)
    }

    fn comment(id: u64, author: u64) -> Comment {
        Comment {
            id,
            user: user(author, 0),
            content: "c".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        }
    }

    fn post(id: u64, comments: usize, hour: u32) -> Post {
        Post {
            id,
            user: user(1, 0),
            content: format!("post {}", id),
            comments: (0..comments as u64).map(|i| comment(id * 100 + i, i % 3)).collect(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
            image_url: None,
        }
    }

    fn ids_of_users(users: &[User]) -> Vec<u64> {
        users.iter().map(|u| u.id).collect()
    }

    fn ids_of_posts(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    fn monday_afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 45, 0).unwrap()
    }

    #[test]
    fn test_sort_users_descending_and_stable() {
        let users = vec![user(1, 5), user(2, 8), user(3, 8), user(4, 0)];
        let sorted = sort_users_by_comment_count(&users);

        assert_eq!(ids_of_users(&sorted), vec![2, 3, 1, 4]);
        // input untouched
        assert_eq!(ids_of_users(&users), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get_top_users_truncates() {
        let users = vec![user(1, 5), user(2, 8), user(3, 12), user(4, 15), user(5, 10), user(6, 1)];

        let top = get_top_users(&users, DEFAULT_TOP_USERS);
        assert_eq!(ids_of_users(&top), vec![4, 3, 5, 2, 1]);

        let top_two = get_top_users(&users, 2);
        assert_eq!(ids_of_users(&top_two), vec![4, 3]);
    }

    #[test]
    fn test_get_top_users_short_input_no_padding() {
        let users = vec![user(1, 1), user(2, 2)];
        assert_eq!(get_top_users(&users, 5).len(), 2);
        assert!(get_top_users(&[], 5).is_empty());
        assert!(get_top_users(&users, 0).is_empty());
    }

    #[test]
    fn test_top_users_properties_over_various_inputs() {
        let inputs: Vec<Vec<User>> = vec![
            vec![user(1, 3)],
            vec![user(1, 3), user(2, 3), user(3, 3)],
            (1..=20).map(|i| user(i, (i * 7) % 11)).collect(),
        ];

        for users in inputs {
            for n in [1, 3, 5, 50] {
                let top = get_top_users(&users, n);
                assert!(top.len() <= n);
                assert!(top.windows(2).all(|w| w[0].comment_count >= w[1].comment_count));
                assert!(top.iter().all(|u| users.contains(u)));
            }
        }
    }

    #[test]
    fn test_sort_posts_by_comment_count() {
        let posts = vec![post(1, 2, 1), post(2, 5, 2), post(3, 0, 3), post(4, 5, 4)];
        assert_eq!(ids_of_posts(&sort_posts_by_comment_count(&posts)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_trending_empty() {
        assert!(get_trending_posts(&[]).is_empty());
    }

    #[test]
    fn test_trending_returns_whole_tie_set() {
        let posts = vec![post(1, 2, 1), post(2, 4, 2), post(3, 4, 3), post(4, 1, 4), post(5, 4, 5)];
        let trending = get_trending_posts(&posts);

        assert_eq!(ids_of_posts(&trending), vec![2, 3, 5]);
    }

    #[test]
    fn test_trending_all_zero_comments_returns_everything() {
        let posts = vec![post(1, 0, 1), post(2, 0, 2)];
        assert_eq!(get_trending_posts(&posts).len(), 2);
    }

    #[test]
    fn test_trending_properties() {
        let inputs: Vec<Vec<Post>> = vec![
            vec![post(1, 3, 1)],
            vec![post(1, 1, 1), post(2, 2, 2), post(3, 3, 3)],
            (1..=12).map(|i| post(i, (i as usize * 5) % 7, 1)).collect(),
        ];

        for posts in inputs {
            let trending = get_trending_posts(&posts);
            let max = posts.iter().map(Post::comment_count).max().unwrap();
            assert!(!trending.is_empty());
            assert!(trending.iter().all(|p| p.comment_count() == max));
            assert_eq!(
                trending.len(),
                posts.iter().filter(|p| p.comment_count() == max).count()
            );
        }
    }

    #[test]
    fn test_sort_posts_by_timestamp_most_recent_first() {
        let posts = vec![post(1, 0, 3), post(2, 0, 9), post(3, 0, 1)];
        let sorted = sort_posts_by_timestamp(&posts);

        assert_eq!(ids_of_posts(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_posts_by_timestamp_idempotent() {
        let posts = vec![post(1, 0, 3), post(2, 0, 3), post(3, 0, 9), post(4, 0, 1)];
        let once = sort_posts_by_timestamp(&posts);
        let twice = sort_posts_by_timestamp(&once);

        assert_eq!(once, twice);
        // equal timestamps keep input order
        assert_eq!(ids_of_posts(&once), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_count_comments_by_author() {
        let posts = vec![post(1, 4, 1), post(2, 2, 2)];
        let counts = count_comments_by_author(&posts);

        // authors cycle 0,1,2,0 then 0,1
        assert_eq!(counts.get(&0), Some(&3));
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
    }

    #[test]
    fn test_format_date_now_is_time_only() {
        let now = monday_afternoon();
        let label = format_date(&now, &now);

        assert_eq!(label, "15:45");
        assert_eq!(label.len(), 5);
        assert!(label.chars().enumerate().all(|(i, c)| if i == 2 { c == ':' } else { c.is_ascii_digit() }));
    }

    #[test]
    fn test_format_date_earlier_today() {
        let now = monday_afternoon();
        let morning = Utc.with_ymd_and_hms(2026, 10, 19, 0, 5, 0).unwrap();
        assert_eq!(format_date(&morning, &now), "00:05");
    }

    #[test]
    fn test_format_date_within_week_shows_weekday() {
        let now = monday_afternoon();
        let saturday = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
        assert_eq!(format_date(&saturday, &now), "Sat 08:00");

        let yesterday_late = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 0).unwrap();
        assert_eq!(format_date(&yesterday_late, &now), "Sun 23:59");
    }

    #[test]
    fn test_format_date_week_boundary_is_exclusive() {
        let now = monday_afternoon();

        let just_inside = now - Duration::days(7) + Duration::minutes(1);
        assert_eq!(format_date(&just_inside, &now), "Mon 15:46");

        let exactly_a_week = now - Duration::days(7);
        assert_eq!(format_date(&exactly_a_week, &now), "Oct 12, 2026");
    }

    #[test]
    fn test_format_date_eight_days_ago_is_full_date() {
        let now = monday_afternoon();
        let label = format_date(&(now - Duration::days(8)), &now);

        assert_eq!(label, "Oct 11, 2026");
        assert!(label.contains("Oct"));
        assert!(label.contains("2026"));
    }

    #[test]
    fn test_format_date_uses_now_time_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = plus_two.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap();
        // 23:30 UTC on the 19th is 01:30 on the 20th at +02:00
        let late = Utc.with_ymd_and_hms(2026, 10, 19, 23, 30, 0).unwrap();

        assert_eq!(format_date(&late, &now), "01:30");
        assert_eq!(format_date(&late, &late), "23:30");
    }

    #[test]
    fn test_format_date_week_boundary_uses_calendar_days_across_dst() {
        // noon on April 2nd (summer time); a week earlier is noon on
        // March 26th in winter time, 167 hours back rather than 168
        let now = Cet.with_ymd_and_hms(2026, 4, 2, 12, 0, 0).unwrap();

        // 11:30 local, after the 168-hour mark but before noon
        let before_noon = Utc.with_ymd_and_hms(2026, 3, 26, 10, 30, 0).unwrap();
        assert_eq!(format_date(&before_noon, &now), "Mar 26, 2026");

        let after_noon = Utc.with_ymd_and_hms(2026, 3, 26, 11, 30, 0).unwrap();
        assert_eq!(format_date(&after_noon, &now), "Thu 12:30");
    }

    #[test]
    fn test_format_date_future_timestamp_on_another_day() {
        let now = monday_afternoon();
        let tomorrow = now + Duration::days(1);
        assert_eq!(format_date(&tomorrow, &now), "Tue 15:45");
    }
}
