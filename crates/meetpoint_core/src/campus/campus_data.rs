//! Built-in campus map: building codes, their display labels, and the
//! walkways between them.

pub const CAMPUS_LOCATIONS: &[(&str, &str)] = &[
    ("I", "정문"),
    ("A", "A동 (본관)"),
    ("B", "B동 (학생회관)"),
    ("C", "C동 (중앙도서관)"),
    ("D", "D동 (공학관)"),
    ("E", "E동 (과학관)"),
    ("F", "F동 (체육관)"),
    ("G", "G동 (인문관)"),
    ("H", "H동 (경영관)"),
    ("J", "J동 (예술관)"),
    ("K", "K동 (사회과학관)"),
    ("L", "L동 (법학관)"),
    ("M", "M동 (음악관)"),
    ("N", "N동 (국제관)"),
    ("P", "P동 (약학관)"),
    ("Q", "Q동 (대강당)"),
    ("R", "R동 (연구동)"),
    ("S", "S동 (산학협력관)"),
    ("T", "T동 (기숙사 식당)"),
    ("U", "대운동장"),
    ("MH", "미래관"),
    ("Z1", "제1기숙사"),
    ("Z2", "제2기숙사"),
    ("Z3", "제3기숙사"),
    ("Z4", "제4기숙사"),
    ("신기숙사", "신기숙사"),
];

pub const CAMPUS_EDGES: &[(&str, &str)] = &[
    ("I", "A"),
    ("I", "L"),
    ("A", "B"),
    ("A", "C"),
    ("C", "D"),
    ("D", "E"),
    ("E", "P"),
    ("P", "S"),
    ("S", "R"),
    ("R", "MH"),
    ("L", "G"),
    ("L", "K"),
    ("G", "Q"),
    ("G", "H"),
    ("Q", "F"),
    ("F", "MH"),
    ("F", "U"),
    ("B", "H"),
    ("H", "N"),
    ("K", "N"),
    ("N", "J"),
    ("J", "M"),
    ("U", "T"),
    ("T", "Z1"),
    ("Z1", "Z2"),
    ("Z2", "Z3"),
    ("Z3", "Z4"),
    ("Z4", "신기숙사"),
    ("신기숙사", "T"),
];
