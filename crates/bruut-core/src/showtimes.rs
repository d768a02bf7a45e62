//! Upcoming screenings block on the film page.

use crate::html::escape;
use bruut_types::Showtime;
use chrono::{Datelike, NaiveDate};
use tracing::warn;

const MONTHS: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// `"2025-03-05"` → `"5 MARCH 2025"`. `None` for anything that is not a date.
pub fn format_date(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    Some(format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    ))
}

/// Screenings on or after `today`, earliest first.
pub fn upcoming(showtimes: &[Showtime], today: NaiveDate) -> Vec<Showtime> {
    let mut dated: Vec<(NaiveDate, &Showtime)> = showtimes
        .iter()
        .filter_map(|s| match parse_date(&s.date) {
            Some(date) => Some((date, s)),
            None => {
                warn!(date = %s.date, film = %s.film_title, "dropping showtime with bad date");
                None
            }
        })
        .filter(|(date, _)| *date >= today)
        .collect();
    dated.sort_by_key(|(date, _)| *date);
    dated.into_iter().map(|(_, s)| s.clone()).collect()
}

/// Markup for the showtimes section, `None` when there is nothing to show.
pub fn render_html(showtimes: &[Showtime]) -> Option<String> {
    if showtimes.is_empty() {
        return None;
    }
    let items: String = showtimes.iter().map(render_item).collect();
    Some(format!(
        r#"<div class="container mt-5">
  <div class="row">
    <div class="col-lg-8">
      <div class="film-description mb-8">
        <h1>Showtimes</h1>
        <p>Come see our films on the big screen.</p>
        <br>
        {items}
      </div>
    </div>
  </div>
</div>"#
    ))
}

fn render_item(s: &Showtime) -> String {
    let date = format_date(&s.date).unwrap_or_else(|| s.date.clone());
    format!(
        r#"<div class="showtime-item">
          <h3>{} - {}</h3>
          <h4>{} - {}</h4>
          <p>{}</p>
          <p><a href="{}" target="_blank" rel="noopener">INFO &amp; TICKETS</a></p>
          <div class="footer-divider mb-4"></div>
        </div>"#,
        escape(&s.film_title),
        escape(&date),
        escape(&s.time),
        escape(&s.venue),
        escape(&s.description),
        escape(&s.ticket_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(title: &str, date: &str) -> Showtime {
        Showtime {
            film_title: title.to_owned(),
            date: date.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_date("2025-03-05").as_deref(), Some("5 MARCH 2025"));
        assert_eq!(format_date("2024-12-31").as_deref(), Some("31 DECEMBER 2024"));
        assert_eq!(format_date("soon"), None);
    }

    #[test]
    fn keeps_today_and_later_sorted() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let list = vec![
            show("late", "2025-04-01"),
            show("past", "2025-03-04"),
            show("today", "2025-03-05"),
            show("broken", "next week"),
            show("soon", "2025-03-10"),
        ];
        let got: Vec<_> = upcoming(&list, today)
            .into_iter()
            .map(|s| s.film_title)
            .collect();
        assert_eq!(got, ["today", "soon", "late"]);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_html(&[]).is_none());
    }

    #[test]
    fn renders_escaped_items() {
        let mut s = show("Zand & Zee", "2025-03-05");
        s.venue = "Eye".into();
        s.time = "20:00".into();
        s.ticket_url = "https://eye.nl/t".into();
        let html = render_html(&[s]).unwrap();
        assert!(html.contains("<h3>Zand &amp; Zee - 5 MARCH 2025</h3>"));
        assert!(html.contains("<h4>20:00 - Eye</h4>"));
        assert!(html.contains(r#"href="https://eye.nl/t""#));
    }
}
