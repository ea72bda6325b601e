//! Fallback fasting timetable for Jakarta (WIB), Ramadhan 1447 H.

use crate::models::ImsakiyahTime;

pub struct ImsakiyahRow {
    pub day: i64,
    pub imsak: &'static str,
    pub subuh: &'static str,
    pub dzuhur: &'static str,
    pub ashar: &'static str,
    pub maghrib: &'static str,
    pub isya: &'static str,
}

impl ImsakiyahRow {
    pub fn to_time(&self) -> ImsakiyahTime {
        ImsakiyahTime {
            day: self.day,
            imsak: self.imsak.to_string(),
            subuh: self.subuh.to_string(),
            dzuhur: self.dzuhur.to_string(),
            ashar: self.ashar.to_string(),
            maghrib: self.maghrib.to_string(),
            isya: self.isya.to_string(),
        }
    }
}

const fn row(
    day: i64,
    imsak: &'static str,
    subuh: &'static str,
    dzuhur: &'static str,
    ashar: &'static str,
    maghrib: &'static str,
    isya: &'static str,
) -> ImsakiyahRow {
    ImsakiyahRow {
        day,
        imsak,
        subuh,
        dzuhur,
        ashar,
        maghrib,
        isya,
    }
}

pub static IMSAKIYAH_JAKARTA_2026: [ImsakiyahRow; 30] = [
    row(1, "04:25", "04:35", "12:08", "15:16", "18:17", "19:28"),
    row(2, "04:25", "04:35", "12:08", "15:16", "18:17", "19:28"),
    row(3, "04:25", "04:35", "12:08", "15:16", "18:16", "19:27"),
    row(4, "04:25", "04:35", "12:07", "15:15", "18:16", "19:27"),
    row(5, "04:25", "04:35", "12:07", "15:15", "18:15", "19:26"),
    row(6, "04:25", "04:35", "12:07", "15:15", "18:15", "19:26"),
    row(7, "04:25", "04:35", "12:07", "15:15", "18:15", "19:26"),
    row(8, "04:25", "04:35", "12:06", "15:14", "18:14", "19:25"),
    row(9, "04:25", "04:35", "12:06", "15:14", "18:14", "19:25"),
    row(10, "04:25", "04:35", "12:06", "15:14", "18:14", "19:24"),
    row(11, "04:25", "04:35", "12:06", "15:14", "18:13", "19:24"),
    row(12, "04:25", "04:35", "12:05", "15:13", "18:13", "19:23"),
    row(13, "04:25", "04:35", "12:05", "15:13", "18:12", "19:23"),
    row(14, "04:25", "04:35", "12:05", "15:13", "18:12", "19:23"),
    row(15, "04:25", "04:35", "12:05", "15:13", "18:12", "19:22"),
    row(16, "04:26", "04:36", "12:04", "15:12", "18:11", "19:22"),
    row(17, "04:26", "04:36", "12:04", "15:12", "18:11", "19:21"),
    row(18, "04:26", "04:36", "12:04", "15:12", "18:11", "19:21"),
    row(19, "04:26", "04:36", "12:04", "15:12", "18:10", "19:21"),
    row(20, "04:26", "04:36", "12:03", "15:11", "18:10", "19:20"),
    row(21, "04:26", "04:36", "12:03", "15:11", "18:09", "19:20"),
    row(22, "04:26", "04:36", "12:03", "15:11", "18:09", "19:19"),
    row(23, "04:26", "04:36", "12:03", "15:11", "18:09", "19:19"),
    row(24, "04:26", "04:36", "12:02", "15:10", "18:08", "19:18"),
    row(25, "04:26", "04:36", "12:02", "15:10", "18:08", "19:18"),
    row(26, "04:26", "04:36", "12:02", "15:10", "18:08", "19:18"),
    row(27, "04:26", "04:36", "12:02", "15:10", "18:07", "19:17"),
    row(28, "04:26", "04:36", "12:01", "15:09", "18:07", "19:17"),
    row(29, "04:26", "04:36", "12:01", "15:09", "18:06", "19:16"),
    row(30, "04:26", "04:36", "12:01", "15:09", "18:06", "19:16"),
];
