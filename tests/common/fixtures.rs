use serde_json::{Value, json};

/// A small but complete resume document
pub fn sample_resume() -> Value {
    json!({
        "basics": {
            "name": "Ada Lovelace",
            "headline": "Analyst of Engines",
            "email": "ada@example.com",
            "phone": "+44 20 7946 0000",
            "location": "London",
            "url": { "href": "https://ada.example.com", "label": "" },
            "customFields": [
                { "id": "cf1", "icon": "flag", "name": "Nationality", "value": "British" }
            ],
            "picture": { "url": "https://img.example.com/ada.png", "size": 96 }
        },
        "sections": {
            "summary": { "content": "<p>Wrote the first program.</p>", "columns": 1 },
            "profiles": section("profiles", "Profiles", json!([
                { "id": "p1", "network": "GitHub", "username": "ada", "icon": "github",
                  "url": { "href": "https://github.com/ada", "label": "" } }
            ])),
            "experience": section("experience", "Experience", json!([
                { "id": "e1", "company": "Analytical Engine Co.", "position": "Programmer",
                  "location": "London", "date": "1842 - 1843",
                  "summary": "<p>Notes on the engine.</p>",
                  "url": { "href": "https://engine.example.com", "label": "" } },
                { "id": "e2", "visible": false, "company": "Hidden Ltd." }
            ])),
            "skills": section("skills", "Skills", json!([
                { "id": "s1", "name": "Mathematics", "description": "Advanced",
                  "level": 5, "keywords": ["calculus", "algebra"] },
                { "id": "s2", "name": "Poetry", "level": 0 }
            ])),
            "languages": section("languages", "Languages", json!([
                { "id": "l1", "name": "English", "description": "Native", "level": 5 },
                { "id": "l2", "name": "French", "description": "", "level": 3 }
            ])),
            "custom": {
                "abc123": section("abc123", "Lectures", json!([
                    { "id": "c1", "name": "On Bernoulli Numbers",
                      "url": { "href": "https://lectures.example.com/bernoulli", "label": "" },
                      "keywords": ["numbers"] }
                ]))
            }
        },
        "metadata": {
            "layout": [
                [["profiles", "summary", "experience", "custom.abc123", "unknown-key"],
                 ["skills", "languages"]],
                [["projects"], ["custom.missing"]]
            ],
            "theme": { "background": "#ffffff", "text": "#000000", "primary": "#059669" },
            "typography": { "font": { "family": "IBM Plex Serif", "size": 13 } }
        }
    })
}

/// A section object with default visibility and one column
pub fn section(id: &str, name: &str, items: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "visible": true,
        "columns": 1,
        "items": items
    })
}

/// A resume whose only section has items that are all hidden
pub fn all_hidden_resume() -> Value {
    json!({
        "sections": {
            "awards": section("awards", "Awards", json!([
                { "id": "a1", "visible": false, "title": "Hidden award" }
            ]))
        },
        "metadata": { "layout": [[["awards"], []]] }
    })
}
