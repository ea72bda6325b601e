use crate::calendar::RAMADAN_DAYS;

pub static RAMADAN_QUOTES: [&str; 30] = [
    "Ramadan adalah waktu untuk membersihkan hati dan mendekatkan diri kepada Sang Pencipta.",
    "Setiap detak jantung di bulan suci ini adalah kesempatan untuk memohon ampunan.",
    "Kesabaran adalah separuh dari iman, dan puasa adalah separuh dari kesabaran.",
    "Berbagi di bulan Ramadan melipatgandakan kebahagiaan dan keberkahan harta.",
    "Al-Qur'an diturunkan di bulan ini sebagai petunjuk bagi umat manusia.",
    "Puasa bukan sekadar menahan lapar, tapi menahan lisan dan hati dari keburukan.",
    "Malam Lailatul Qadr lebih baik dari seribu bulan, carilah dengan ketulusan.",
    "Sedekah yang paling utama adalah sedekah di bulan Ramadan.",
    "Jadikan salat sebagai penyejuk hati dan puasa sebagai perisai diri.",
    "Ramadan adalah sekolah kedisiplinan dan empati terhadap sesama.",
    "Senyummu di hadapan saudaramu saat berbuka adalah sedekah.",
    "Doa orang yang berpuasa tidak akan tertolak, manfaatkanlah setiap waktu.",
    "Kebersihan jiwa dimulai dengan kejujuran dalam berpuasa.",
    "Tangan yang di atas lebih baik daripada tangan yang di bawah, terutama di bulan ini.",
    "Ingatlah Allah dalam lapangmu, maka Dia akan mengingatmu dalam sempitmu.",
    "Puasa mendidik kita untuk menghargai setiap butir nasi dan seteguk air.",
    "Ikhlas adalah kunci diterimanya segala amal ibadah kita.",
    "Ramadan mengajarkan kita bahwa kita mampu mengendalikan hawa nafsu.",
    "Istiqomah dalam kebaikan adalah tanda suksesnya madrasah Ramadan.",
    "Maafkanlah orang lain sebelum kamu memohon ampunan kepada Allah.",
    "Ketakwaan adalah bekal terbaik bagi setiap hamba.",
    "Zakat fitrah membersihkan harta dan menyempurnakan ibadah puasa.",
    "Jauhilah ghibah, karena ia merusak pahala puasa yang kita bangun.",
    "Sholat tarawih adalah kesempatan untuk merasakan ketenangan dalam berjamaah.",
    "Semangat Ramadan janganlah luntur meski bulan berganti.",
    "Ilmu yang bermanfaat adalah cahaya bagi langkah kita di dunia dan akhirat.",
    "Sabar menghadapi ujian lapar adalah latihan menghadapi ujian hidup.",
    "Ramadan adalah momen transformasi diri menjadi pribadi yang lebih baik.",
    "Kesyukuran akan menambah nikmat yang telah Allah berikan.",
    "Semoga Allah menerima seluruh amal ibadah kita di bulan yang mulia ini.",
];

/// Daily insight for an observance day. Days outside the month reuse the
/// nearest quote.
pub fn insight(day: i64) -> String {
    let index = (day - 1).clamp(0, RAMADAN_DAYS - 1) as usize;
    strip_markup(RAMADAN_QUOTES[index])
}

/// Remove markdown emphasis characters and surrounding whitespace.
pub fn strip_markup(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '#' | '_' | '~' | '`'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_clamps_day() {
        assert_eq!(insight(1), RAMADAN_QUOTES[0]);
        assert_eq!(insight(-4), RAMADAN_QUOTES[0]);
        assert_eq!(insight(30), RAMADAN_QUOTES[29]);
        assert_eq!(insight(31), RAMADAN_QUOTES[29]);
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("  **Sabar** adalah _kunci_ "), "Sabar adalah kunci");
    }
}
