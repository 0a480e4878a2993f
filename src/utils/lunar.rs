use chrono::NaiveDate;

const LUNAR_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const LUNAR_DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
    "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).expect("valid base date")
}

/// Rough lunar date label for display next to a selected day.
///
/// This is a decorative approximation (flat 365-day years, 30-day months
/// counted from 2000-01-06), not a real lunisolar conversion. Do not use it
/// for anything that needs an accurate lunar calendar.
pub fn lunar_label(date: NaiveDate) -> String {
    let days_diff = (date - base_date()).num_days();

    if days_diff < -3650 {
        return "农历日期".to_string();
    }

    let elapsed = days_diff.abs();
    let lunar_year = 2000 + elapsed / 365;
    let year_day = elapsed % 365;
    let month_index = ((year_day / 30) as usize).min(LUNAR_MONTHS.len() - 1);
    let day_index = ((year_day % 30) as usize).min(LUNAR_DAYS.len() - 1);

    format!(
        "农历{}年{}月{}",
        lunar_year, LUNAR_MONTHS[month_index], LUNAR_DAYS[day_index]
    )
}
