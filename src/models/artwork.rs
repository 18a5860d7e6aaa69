use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artwork {
    pub name: String,
    pub technique: String,
    pub year: String,
    pub image_src: String,
}

impl Artwork {
    fn new(name: &str, technique: &str, year: &str, image_src: &str) -> Self {
        Artwork {
            name: name.to_string(),
            technique: technique.to_string(),
            year: year.to_string(),
            image_src: image_src.to_string(),
        }
    }
}

/// The gallery shown when `site.toml` has no `[[artworks]]` entries.
pub fn default_artworks() -> Vec<Artwork> {
    vec![
        Artwork::new(
            "ダイナミックな神獣たち",
            "モダンテクニック",
            "2013年（中学1年）",
            "/assets/img/masterpiece/img_masterpiece1.jpg",
        ),
        Artwork::new(
            "海に浮かぶ城",
            "スクラッチ絵",
            "2015年（中学3年）",
            "/assets/img/masterpiece/img_masterpiece2.jpg",
        ),
        Artwork::new(
            "平屋建専用住宅設計図",
            "製図",
            "2018年（高校2年）",
            "/assets/img/masterpiece/img_masterpiece3.jpg",
        ),
        Artwork::new(
            "二級建築士 製図練習",
            "製図",
            "2018年（高校2年）",
            "/assets/img/masterpiece/img_masterpiece4.jpg",
        ),
        Artwork::new(
            "Cats Cafe",
            "製図",
            "2019年（高校3年）",
            "/assets/img/masterpiece/img_masterpiece5.jpg",
        ),
    ]
}
