use crate::version::{BlockGroup, QrCodeEcc, Version, VersionInfo};

use QrCodeEcc::*;

const fn row(
    ver: u8,
    ecl: QrCodeEcc,
    capacity: [u16; 4],
    total_words: u16,
    group1: (u8, u16),
    group2: (u8, u16),
    ec_words_per_block: u8,
) -> VersionInfo {
    VersionInfo {
        version: Version::new(ver),
        ecl,
        capacity,
        total_words,
        groups: [
            BlockGroup { blocks: group1.0, words_per_block: group1.1 },
            BlockGroup { blocks: group2.0, words_per_block: group2.1 },
        ],
        ec_words_per_block,
    }
}

/// Capacities and block layout for every version and error correction level.
///
/// Rows are ordered by version, then by level (Low, Medium, Quartile, High), so the
/// row for `(v, ecl)` sits at index `(v - 1) * 4 + ecl.ordinal()`.
///
/// Columns: version, level, capacity in characters (numeric, alphanumeric, byte, kanji),
/// data codewords, group 1 (blocks, data codewords per block), group 2, EC codewords per block.
pub(crate) static CAPACITY_TABLE: [VersionInfo; 160] = [
    row(1, Low, [41, 25, 17, 10], 19, (1, 19), (0, 0), 7),
    row(1, Medium, [34, 20, 14, 8], 16, (1, 16), (0, 0), 10),
    row(1, Quartile, [27, 16, 11, 7], 13, (1, 13), (0, 0), 13),
    row(1, High, [17, 10, 7, 4], 9, (1, 9), (0, 0), 17),

    row(2, Low, [77, 47, 32, 20], 34, (1, 34), (0, 0), 10),
    row(2, Medium, [63, 38, 26, 16], 28, (1, 28), (0, 0), 16),
    row(2, Quartile, [48, 29, 20, 12], 22, (1, 22), (0, 0), 22),
    row(2, High, [34, 20, 14, 8], 16, (1, 16), (0, 0), 28),

    row(3, Low, [127, 77, 53, 32], 55, (1, 55), (0, 0), 15),
    row(3, Medium, [101, 61, 42, 26], 44, (1, 44), (0, 0), 26),
    row(3, Quartile, [77, 47, 32, 20], 34, (2, 17), (0, 0), 18),
    row(3, High, [58, 35, 24, 15], 26, (2, 13), (0, 0), 22),

    row(4, Low, [187, 114, 78, 48], 80, (1, 80), (0, 0), 20),
    row(4, Medium, [149, 90, 62, 38], 64, (2, 32), (0, 0), 18),
    row(4, Quartile, [111, 67, 46, 28], 48, (2, 24), (0, 0), 26),
    row(4, High, [82, 50, 34, 21], 36, (4, 9), (0, 0), 16),

    row(5, Low, [255, 154, 106, 65], 108, (1, 108), (0, 0), 26),
    row(5, Medium, [202, 122, 84, 52], 86, (2, 43), (0, 0), 24),
    row(5, Quartile, [144, 87, 60, 37], 62, (2, 15), (2, 16), 18),
    row(5, High, [106, 64, 44, 27], 46, (2, 11), (2, 12), 22),

    row(6, Low, [322, 195, 134, 82], 136, (2, 68), (0, 0), 18),
    row(6, Medium, [255, 154, 106, 65], 108, (4, 27), (0, 0), 16),
    row(6, Quartile, [178, 108, 74, 45], 76, (4, 19), (0, 0), 24),
    row(6, High, [139, 84, 58, 36], 60, (4, 15), (0, 0), 28),

    row(7, Low, [370, 224, 154, 95], 156, (2, 78), (0, 0), 20),
    row(7, Medium, [293, 178, 122, 75], 124, (4, 31), (0, 0), 18),
    row(7, Quartile, [207, 125, 86, 53], 88, (2, 14), (4, 15), 18),
    row(7, High, [154, 93, 64, 39], 66, (4, 13), (1, 14), 26),

    row(8, Low, [461, 279, 192, 118], 194, (2, 97), (0, 0), 24),
    row(8, Medium, [365, 221, 152, 93], 154, (2, 38), (2, 39), 22),
    row(8, Quartile, [259, 157, 108, 66], 110, (4, 18), (2, 19), 22),
    row(8, High, [202, 122, 84, 52], 86, (4, 14), (2, 15), 26),

    row(9, Low, [552, 335, 230, 141], 232, (2, 116), (0, 0), 30),
    row(9, Medium, [432, 262, 180, 111], 182, (3, 36), (2, 37), 22),
    row(9, Quartile, [312, 189, 130, 80], 132, (4, 16), (4, 17), 20),
    row(9, High, [235, 143, 98, 60], 100, (4, 12), (4, 13), 24),

    row(10, Low, [652, 395, 271, 167], 274, (2, 68), (2, 69), 18),
    row(10, Medium, [513, 311, 213, 131], 216, (4, 43), (1, 44), 26),
    row(10, Quartile, [364, 221, 151, 93], 154, (6, 19), (2, 20), 24),
    row(10, High, [288, 174, 119, 74], 122, (6, 15), (2, 16), 28),

    row(11, Low, [772, 468, 321, 198], 324, (4, 81), (0, 0), 20),
    row(11, Medium, [604, 366, 251, 155], 254, (1, 50), (4, 51), 30),
    row(11, Quartile, [427, 259, 177, 109], 180, (4, 22), (4, 23), 28),
    row(11, High, [331, 200, 137, 85], 140, (3, 12), (8, 13), 24),

    row(12, Low, [883, 535, 367, 226], 370, (2, 92), (2, 93), 24),
    row(12, Medium, [691, 419, 287, 177], 290, (6, 36), (2, 37), 22),
    row(12, Quartile, [489, 296, 203, 125], 206, (4, 20), (6, 21), 26),
    row(12, High, [374, 227, 155, 96], 158, (7, 14), (4, 15), 28),

    row(13, Low, [1022, 619, 425, 262], 428, (4, 107), (0, 0), 26),
    row(13, Medium, [796, 483, 331, 204], 334, (8, 37), (1, 38), 22),
    row(13, Quartile, [580, 352, 241, 149], 244, (8, 20), (4, 21), 24),
    row(13, High, [427, 259, 177, 109], 180, (12, 11), (4, 12), 22),

    row(14, Low, [1101, 667, 458, 282], 461, (3, 115), (1, 116), 30),
    row(14, Medium, [871, 528, 362, 223], 365, (4, 40), (5, 41), 24),
    row(14, Quartile, [621, 376, 258, 159], 261, (11, 16), (5, 17), 20),
    row(14, High, [468, 283, 194, 120], 197, (11, 12), (5, 13), 24),

    row(15, Low, [1250, 758, 520, 320], 523, (5, 87), (1, 88), 22),
    row(15, Medium, [991, 600, 412, 254], 415, (5, 41), (5, 42), 24),
    row(15, Quartile, [703, 426, 292, 180], 295, (5, 24), (7, 25), 30),
    row(15, High, [530, 321, 220, 136], 223, (11, 12), (7, 13), 24),

    row(16, Low, [1408, 854, 586, 361], 589, (5, 98), (1, 99), 24),
    row(16, Medium, [1082, 656, 450, 277], 453, (7, 45), (3, 46), 28),
    row(16, Quartile, [775, 470, 322, 198], 325, (15, 19), (2, 20), 24),
    row(16, High, [602, 365, 250, 154], 253, (3, 15), (13, 16), 30),

    row(17, Low, [1548, 938, 644, 397], 647, (1, 107), (5, 108), 28),
    row(17, Medium, [1212, 734, 504, 310], 507, (10, 46), (1, 47), 28),
    row(17, Quartile, [876, 531, 364, 224], 367, (1, 22), (15, 23), 28),
    row(17, High, [674, 408, 280, 173], 283, (2, 14), (17, 15), 28),

    row(18, Low, [1725, 1046, 718, 442], 721, (5, 120), (1, 121), 30),
    row(18, Medium, [1346, 816, 560, 345], 563, (9, 43), (4, 44), 26),
    row(18, Quartile, [948, 574, 394, 243], 397, (17, 22), (1, 23), 28),
    row(18, High, [746, 452, 310, 191], 313, (2, 14), (19, 15), 28),

    row(19, Low, [1903, 1153, 792, 488], 795, (3, 113), (4, 114), 28),
    row(19, Medium, [1500, 909, 624, 384], 627, (3, 44), (11, 45), 26),
    row(19, Quartile, [1063, 644, 442, 272], 445, (17, 21), (4, 22), 26),
    row(19, High, [813, 493, 338, 208], 341, (9, 13), (16, 14), 26),

    row(20, Low, [2061, 1249, 858, 528], 861, (3, 107), (5, 108), 28),
    row(20, Medium, [1600, 970, 666, 410], 669, (3, 41), (13, 42), 26),
    row(20, Quartile, [1159, 702, 482, 297], 485, (15, 24), (5, 25), 30),
    row(20, High, [919, 557, 382, 235], 385, (15, 15), (10, 16), 28),

    row(21, Low, [2232, 1352, 929, 572], 932, (4, 116), (4, 117), 28),
    row(21, Medium, [1708, 1035, 711, 438], 714, (17, 42), (0, 0), 26),
    row(21, Quartile, [1224, 742, 509, 314], 512, (17, 22), (6, 23), 28),
    row(21, High, [969, 587, 403, 248], 406, (19, 16), (6, 17), 30),

    row(22, Low, [2409, 1460, 1003, 618], 1006, (2, 111), (7, 112), 28),
    row(22, Medium, [1872, 1134, 779, 480], 782, (17, 46), (0, 0), 28),
    row(22, Quartile, [1358, 823, 565, 348], 568, (7, 24), (16, 25), 30),
    row(22, High, [1056, 640, 439, 270], 442, (34, 13), (0, 0), 24),

    row(23, Low, [2620, 1588, 1091, 672], 1094, (4, 121), (5, 122), 30),
    row(23, Medium, [2059, 1248, 857, 528], 860, (4, 47), (14, 48), 28),
    row(23, Quartile, [1468, 890, 611, 376], 614, (11, 24), (14, 25), 30),
    row(23, High, [1108, 672, 461, 284], 464, (16, 15), (14, 16), 30),

    row(24, Low, [2812, 1704, 1171, 721], 1174, (6, 117), (4, 118), 30),
    row(24, Medium, [2188, 1326, 911, 561], 914, (6, 45), (14, 46), 28),
    row(24, Quartile, [1588, 963, 661, 407], 664, (11, 24), (16, 25), 30),
    row(24, High, [1228, 744, 511, 315], 514, (30, 16), (2, 17), 30),

    row(25, Low, [3057, 1853, 1273, 784], 1276, (8, 106), (4, 107), 26),
    row(25, Medium, [2395, 1451, 997, 614], 1000, (8, 47), (13, 48), 28),
    row(25, Quartile, [1718, 1041, 715, 440], 718, (7, 24), (22, 25), 30),
    row(25, High, [1286, 779, 535, 330], 538, (22, 15), (13, 16), 30),

    row(26, Low, [3283, 1990, 1367, 842], 1370, (10, 114), (2, 115), 28),
    row(26, Medium, [2544, 1542, 1059, 652], 1062, (19, 46), (4, 47), 28),
    row(26, Quartile, [1804, 1094, 751, 462], 754, (28, 22), (6, 23), 28),
    row(26, High, [1425, 864, 593, 365], 596, (33, 16), (4, 17), 30),

    row(27, Low, [3517, 2132, 1465, 902], 1468, (8, 122), (4, 123), 30),
    row(27, Medium, [2701, 1637, 1125, 692], 1128, (22, 45), (3, 46), 28),
    row(27, Quartile, [1933, 1172, 805, 496], 808, (8, 23), (26, 24), 30),
    row(27, High, [1501, 910, 625, 385], 628, (12, 15), (28, 16), 30),

    row(28, Low, [3669, 2223, 1528, 940], 1531, (3, 117), (10, 118), 30),
    row(28, Medium, [2857, 1732, 1190, 732], 1193, (3, 45), (23, 46), 28),
    row(28, Quartile, [2085, 1263, 868, 534], 871, (4, 24), (31, 25), 30),
    row(28, High, [1581, 958, 658, 405], 661, (11, 15), (31, 16), 30),

    row(29, Low, [3909, 2369, 1628, 1002], 1631, (7, 116), (7, 117), 30),
    row(29, Medium, [3035, 1839, 1264, 778], 1267, (21, 45), (7, 46), 28),
    row(29, Quartile, [2181, 1322, 908, 559], 911, (1, 23), (37, 24), 30),
    row(29, High, [1677, 1016, 698, 430], 701, (19, 15), (26, 16), 30),

    row(30, Low, [4158, 2520, 1732, 1066], 1735, (5, 115), (10, 116), 30),
    row(30, Medium, [3289, 1994, 1370, 843], 1373, (19, 47), (10, 48), 28),
    row(30, Quartile, [2358, 1429, 982, 604], 985, (15, 24), (25, 25), 30),
    row(30, High, [1782, 1080, 742, 457], 745, (23, 15), (25, 16), 30),

    row(31, Low, [4417, 2677, 1840, 1132], 1843, (13, 115), (3, 116), 30),
    row(31, Medium, [3486, 2113, 1452, 894], 1455, (2, 46), (29, 47), 28),
    row(31, Quartile, [2473, 1499, 1030, 634], 1033, (42, 24), (1, 25), 30),
    row(31, High, [1897, 1150, 790, 486], 793, (23, 15), (28, 16), 30),

    row(32, Low, [4686, 2840, 1952, 1201], 1955, (17, 115), (0, 0), 30),
    row(32, Medium, [3693, 2238, 1538, 947], 1541, (10, 46), (23, 47), 28),
    row(32, Quartile, [2670, 1618, 1112, 684], 1115, (10, 24), (35, 25), 30),
    row(32, High, [2022, 1226, 842, 518], 845, (19, 15), (35, 16), 30),

    row(33, Low, [4965, 3009, 2068, 1273], 2071, (17, 115), (1, 116), 30),
    row(33, Medium, [3909, 2369, 1628, 1002], 1631, (14, 46), (21, 47), 28),
    row(33, Quartile, [2805, 1700, 1168, 719], 1171, (29, 24), (19, 25), 30),
    row(33, High, [2157, 1307, 898, 553], 901, (11, 15), (46, 16), 30),

    row(34, Low, [5253, 3183, 2188, 1347], 2191, (13, 115), (6, 116), 30),
    row(34, Medium, [4134, 2506, 1722, 1060], 1725, (14, 46), (23, 47), 28),
    row(34, Quartile, [2949, 1787, 1228, 756], 1231, (44, 24), (7, 25), 30),
    row(34, High, [2301, 1394, 958, 590], 961, (59, 16), (1, 17), 30),

    row(35, Low, [5529, 3351, 2303, 1417], 2306, (12, 121), (7, 122), 30),
    row(35, Medium, [4343, 2632, 1809, 1113], 1812, (12, 47), (26, 48), 28),
    row(35, Quartile, [3081, 1867, 1283, 790], 1286, (39, 24), (14, 25), 30),
    row(35, High, [2361, 1431, 983, 605], 986, (22, 15), (41, 16), 30),

    row(36, Low, [5836, 3537, 2431, 1496], 2434, (6, 121), (14, 122), 30),
    row(36, Medium, [4588, 2780, 1911, 1176], 1914, (6, 47), (34, 48), 28),
    row(36, Quartile, [3244, 1966, 1351, 832], 1354, (46, 24), (10, 25), 30),
    row(36, High, [2524, 1530, 1051, 647], 1054, (2, 15), (64, 16), 30),

    row(37, Low, [6153, 3729, 2563, 1577], 2566, (17, 122), (4, 123), 30),
    row(37, Medium, [4775, 2894, 1989, 1224], 1992, (29, 46), (14, 47), 28),
    row(37, Quartile, [3417, 2071, 1423, 876], 1426, (49, 24), (10, 25), 30),
    row(37, High, [2625, 1591, 1093, 673], 1096, (24, 15), (46, 16), 30),

    row(38, Low, [6479, 3927, 2699, 1661], 2702, (4, 122), (18, 123), 30),
    row(38, Medium, [5039, 3054, 2099, 1292], 2102, (13, 46), (32, 47), 28),
    row(38, Quartile, [3599, 2181, 1499, 923], 1502, (48, 24), (14, 25), 30),
    row(38, High, [2735, 1658, 1139, 701], 1142, (42, 15), (32, 16), 30),

    row(39, Low, [6743, 4087, 2809, 1729], 2812, (20, 117), (4, 118), 30),
    row(39, Medium, [5313, 3220, 2213, 1362], 2216, (40, 47), (7, 48), 28),
    row(39, Quartile, [3791, 2298, 1579, 972], 1582, (43, 24), (22, 25), 30),
    row(39, High, [2927, 1774, 1219, 750], 1222, (10, 15), (67, 16), 30),

    row(40, Low, [7089, 4296, 2953, 1817], 2956, (19, 118), (6, 119), 30),
    row(40, Medium, [5596, 3391, 2331, 1435], 2334, (18, 47), (31, 48), 28),
    row(40, Quartile, [3993, 2420, 1663, 1024], 1666, (34, 24), (34, 25), 30),
    row(40, High, [3057, 1852, 1273, 784], 1276, (20, 15), (61, 16), 30),
];
