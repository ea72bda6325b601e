use crate::reference::Surah;

const fn surah(number: u16, name_arabic: &'static str, name: &'static str, verses: u32) -> Surah {
    Surah {
        number,
        name_arabic,
        name,
        verses,
    }
}

pub static SURAHS: [Surah; 114] = [
    surah(1, "الفاتحة", "Al-Fatihah", 7),
    surah(2, "البقرة", "Al-Baqarah", 286),
    surah(3, "آل عمران", "Ali 'Imran", 200),
    surah(4, "النساء", "An-Nisa'", 176),
    surah(5, "المائدة", "Al-Ma'idah", 120),
    surah(6, "الأنعام", "Al-An'am", 165),
    surah(7, "الأعراف", "Al-A'raf", 206),
    surah(8, "الأنفال", "Al-Anfal", 75),
    surah(9, "التوبة", "At-Taubah", 129),
    surah(10, "يونس", "Yunus", 109),
    surah(11, "هود", "Hud", 123),
    surah(12, "يوسف", "Yusuf", 111),
    surah(13, "الرعد", "Ar-Ra'd", 43),
    surah(14, "إبراهيم", "Ibrahim", 52),
    surah(15, "الحجر", "Al-Hijr", 99),
    surah(16, "النحل", "An-Nahl", 128),
    surah(17, "الإسراء", "Al-Isra'", 111),
    surah(18, "الكهف", "Al-Kahf", 110),
    surah(19, "مريم", "Maryam", 98),
    surah(20, "طه", "Taha", 135),
    surah(21, "الأنبياء", "Al-Anbiya'", 112),
    surah(22, "الحج", "Al-Hajj", 78),
    surah(23, "المؤمنون", "Al-Mu'minun", 118),
    surah(24, "النور", "An-Nur", 64),
    surah(25, "الفرقان", "Al-Furqan", 77),
    surah(26, "الشعراء", "Asy-Syu'ara'", 227),
    surah(27, "النمل", "An-Naml", 93),
    surah(28, "القصص", "Al-Qasas", 88),
    surah(29, "العنكبوت", "Al-'Ankabut", 69),
    surah(30, "الروم", "Ar-Rum", 60),
    surah(31, "لقمان", "Luqman", 34),
    surah(32, "السجدة", "As-Sajdah", 30),
    surah(33, "الأحزاب", "Al-Ahzab", 73),
    surah(34, "سبإ", "Saba'", 54),
    surah(35, "فاطر", "Fatir", 45),
    surah(36, "يس", "Yasin", 83),
    surah(37, "الصافات", "As-Saffat", 182),
    surah(38, "ص", "Sad", 88),
    surah(39, "الزمر", "Az-Zumar", 75),
    surah(40, "غافر", "Gafir", 85),
    surah(41, "فصلت", "Fussilat", 54),
    surah(42, "الشورى", "Asy-Syura", 53),
    surah(43, "الزخرف", "Az-Zukhruf", 89),
    surah(44, "الدخان", "Ad-Dukhan", 59),
    surah(45, "الجاثية", "Al-Jasiyah", 37),
    surah(46, "الأحقاف", "Al-Ahqaf", 35),
    surah(47, "محمد", "Muhammad", 38),
    surah(48, "الفتح", "Al-Fath", 29),
    surah(49, "الحجرات", "Al-Hujurat", 18),
    surah(50, "ق", "Qaf", 45),
    surah(51, "الذاريات", "Az-Zariyat", 60),
    surah(52, "الطور", "At-Tur", 49),
    surah(53, "النجم", "An-Najm", 62),
    surah(54, "القمر", "Al-Qamar", 55),
    surah(55, "الرحمن", "Ar-Rahman", 78),
    surah(56, "الواقعة", "Al-Waqi'ah", 96),
    surah(57, "الحديد", "Al-Hadid", 29),
    surah(58, "المجادلة", "Al-Mujadilah", 22),
    surah(59, "الحشر", "Al-Hasyr", 24),
    surah(60, "الممتحنة", "Al-Mumtahanah", 13),
    surah(61, "الصف", "As-Saff", 14),
    surah(62, "الجمعة", "Al-Jumu'ah", 11),
    surah(63, "المنافقون", "Al-Munafiqun", 11),
    surah(64, "التغابن", "At-Tagabun", 18),
    surah(65, "الطلاق", "At-Talaq", 12),
    surah(66, "التحريم", "At-Tahrim", 12),
    surah(67, "الملك", "Al-Mulk", 30),
    surah(68, "القلم", "Al-Qalam", 52),
    surah(69, "الحاقة", "Al-Haqqah", 52),
    surah(70, "المعارج", "Al-Ma'arij", 44),
    surah(71, "نوح", "Nuh", 28),
    surah(72, "الجن", "Al-Jinn", 28),
    surah(73, "المزمل", "Al-Muzzammil", 20),
    surah(74, "المدثر", "Al-Muddassir", 56),
    surah(75, "القيامة", "Al-Qiyamah", 40),
    surah(76, "الإنسان", "Al-Insan", 31),
    surah(77, "المرسلات", "Al-Mursalat", 50),
    surah(78, "النبإ", "An-Naba'", 40),
    surah(79, "النازعات", "An-Nazi'at", 46),
    surah(80, "عبس", "'Abasa", 42),
    surah(81, "التكوير", "At-Takwir", 29),
    surah(82, "الانفطار", "Al-Infitar", 19),
    surah(83, "المطففين", "Al-Mutaffifin", 36),
    surah(84, "الانشقاق", "Al-Insyiqaq", 25),
    surah(85, "البروج", "Al-Buruj", 22),
    surah(86, "الطارق", "At-Tariq", 17),
    surah(87, "الأعلى", "Al-A'la", 19),
    surah(88, "الغاشية", "Al-Gasyiyah", 26),
    surah(89, "الفجر", "Al-Fajr", 30),
    surah(90, "البلد", "Al-Balad", 20),
    surah(91, "الشمس", "Asy-Syams", 15),
    surah(92, "الليل", "Al-Lail", 21),
    surah(93, "الضحى", "Ad-Duha", 11),
    surah(94, "الشرح", "Asy-Syarh", 8),
    surah(95, "التين", "At-Tin", 8),
    surah(96, "العلق", "Al-'Alaq", 19),
    surah(97, "القدر", "Al-Qadr", 5),
    surah(98, "البينة", "Al-Bayyinah", 8),
    surah(99, "الزلزلة", "Az-Zalzalah", 8),
    surah(100, "العاديات", "Al-'Adiyat", 11),
    surah(101, "القارعة", "Al-Qari'ah", 11),
    surah(102, "التكاثر", "At-Takasur", 8),
    surah(103, "العصر", "Al-'Asr", 3),
    surah(104, "الهمزة", "Al-Humazah", 9),
    surah(105, "الفيل", "Al-Fil", 5),
    surah(106, "قريش", "Quraisy", 4),
    surah(107, "الماعون", "Al-Ma'un", 7),
    surah(108, "الكوثر", "Al-Kausar", 3),
    surah(109, "الكافرون", "Al-Kafirun", 6),
    surah(110, "النصر", "An-Nasr", 3),
    surah(111, "المسد", "Al-Lahab", 5),
    surah(112, "الإخلاص", "Al-Ikhlas", 4),
    surah(113, "الفلق", "Al-Falaq", 5),
    surah(114, "الناس", "An-Nas", 6),
];
