use schemars::schema_for;

use crate::models::domain::MathQuestion;

fn grade_topics(grade: u8) -> &'static str {
    match grade {
        3 => "simple 2-digit addition and subtraction.",
        4 => "2-digit multiplication and single-digit division.",
        5 => "3-digit addition/subtraction, 2-digit multiplication, and division with remainders.",
        6 => "operations with simple fractions (addition/subtraction) and decimals (to one decimal place).",
        7 => "percentages, negative numbers, and order of operations (PEMDAS/BODMAS).",
        8 => "basic algebra like solving for x in 'x + 5 = 10', and simple exponents.",
        9 => "solving simple linear equations, and multi-step word problems.",
        _ => "a mix of arithmetic operations suitable for middle school.",
    }
}

pub fn build_question_prompt(grade: u8, count: usize) -> String {
    let schema = serde_json::to_string(&schema_for!(Vec<MathQuestion>))
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        "Generate {count} mental math questions suitable for a Grade {grade} student. \
The questions should cover {topics} \
Do not include word problems, only numerical expressions. The answer must be a single number.

IMPORTANT: Return the response ONLY as a valid JSON array of objects, where each object has a \"question\" (string) and \"answer\" (number) key.
The array must validate against this JSON schema: {schema}
Example format: [{{\"question\": \"15 * 7\", \"answer\": 105}}, {{\"question\": \"120 - 45\", \"answer\": 75}}]",
        count = count,
        grade = grade,
        topics = grade_topics(grade),
        schema = schema,
    )
}
