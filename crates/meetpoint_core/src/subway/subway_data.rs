//! Built-in subway lines around campus. Each line lists its stations in
//! running order; a station shared by several lines is an interchange.

pub const SUBWAY_LINES: &[(&str, &[&str])] = &[
    (
        "1호선",
        &[
            "서울역", "시청", "종각", "종로3가", "종로5가", "동대문", "동묘앞", "신설동", "제기동",
            "청량리", "회기", "외대앞", "신이문", "석계", "광운대",
        ],
    ),
    (
        "2호선",
        &[
            "시청", "을지로입구", "을지로3가", "을지로4가", "동대문역사문화공원", "신당",
            "상왕십리", "왕십리", "한양대", "뚝섬", "성수", "건대입구", "구의", "강변", "잠실나루",
            "잠실",
        ],
    ),
    (
        "3호선",
        &["약수", "동대입구", "충무로", "을지로3가", "종로3가", "안국", "경복궁"],
    ),
    (
        "4호선",
        &[
            "서울역", "회현", "명동", "충무로", "동대문역사문화공원", "동대문", "혜화",
            "한성대입구", "성신여대입구", "길음", "미아사거리", "미아", "수유",
        ],
    ),
    (
        "5호선",
        &[
            "종로3가", "을지로4가", "동대문역사문화공원", "청구", "신금호", "행당", "왕십리",
            "마장", "답십리", "장한평",
        ],
    ),
    (
        "6호선",
        &[
            "석계", "돌곶이", "상월곡", "월곡", "고려대", "안암", "보문", "창신", "동묘앞", "신당",
            "청구", "약수",
        ],
    ),
    (
        "경의중앙선",
        &[
            "용산", "이촌", "서빙고", "한남", "옥수", "응봉", "왕십리", "청량리", "회기", "중랑",
            "상봉",
        ],
    ),
    (
        "우이신설선",
        &[
            "신설동", "보문", "성신여대입구", "정릉", "솔샘", "삼양사거리", "삼양", "화계",
            "가오리", "4.19민주묘지", "솔밭공원", "북한산우이",
        ],
    ),
];

/// Lines with long headways. Riding them between two stations costs more
/// than a regular hop.
pub const PENALIZED_LINES: &[&str] = &["경의중앙선", "우이신설선"];
