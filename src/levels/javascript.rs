// JavaScript track.
// Easy 1-7, medium 8-14, hard 15-20.
use super::LevelDef;

pub static JAVASCRIPT_LEVELS: [LevelDef; 20] = [
    LevelDef {
        id: 1,
        title: "Missing Semicolon",
        description: "JavaScript statements should end with semicolons. This code is missing semicolons at the end of each line.",
        buggy_code: "const x = 5\nconst y = 10",
        correct_code: "const x = 5;\nconst y = 10;",
        hints: &[
            "Look at the end of each line",
            "Add semicolons after statements",
            "Place ; at the end of each line",
        ],
    },
    LevelDef {
        id: 2,
        title: "Missing Quotes",
        description: "String values must be wrapped in quotes. The name 'John' needs quotes around it.",
        buggy_code: "const name = John;",
        correct_code: "const name = 'John';",
        hints: &[
            "Strings need quotes around them",
            "Add quotes around John",
            "Use 'John' or \"John\"",
        ],
    },
    LevelDef {
        id: 3,
        title: "Wrong Operator",
        description: "This code should calculate the difference between two numbers, but it's using the wrong operator.",
        buggy_code: "const diff = a + b;",
        correct_code: "const diff = a - b;",
        hints: &[
            "Check the operator for subtraction",
            "Use - instead of +",
            "Change + to -",
        ],
    },
    LevelDef {
        id: 4,
        title: "Missing Return Statement",
        description: "This function is supposed to return the sum but it's missing a return statement. Add 'return' before the calculation.",
        buggy_code: "function getSum(a, b) {\n  a + b;\n}",
        correct_code: "function getSum(a, b) {\n  return a + b;\n}",
        hints: &[
            "The function doesn't return anything",
            "Add the return keyword",
            "return a + b;",
        ],
    },
    LevelDef {
        id: 5,
        title: "Wrong Boolean Value",
        description: "Boolean values in JavaScript are lowercase. 'True' should be 'true'.",
        buggy_code: "const flag = True;",
        correct_code: "const flag = true;",
        hints: &[
            "Boolean values are lowercase in JavaScript",
            "Change True to true",
            "Use lowercase: true or false",
        ],
    },
    LevelDef {
        id: 6,
        title: "Incorrect Index",
        description: "Arrays are zero-indexed. The first element is at index 0, not 1.",
        buggy_code: "const first = arr[1];",
        correct_code: "const first = arr[0];",
        hints: &[
            "Arrays start at index 0",
            "The first element is at position 0",
            "Change 1 to 0",
        ],
    },
    LevelDef {
        id: 7,
        title: "Variable Name Typo",
        description: "Variable names must match exactly. 'mesage' is misspelled - it should be 'message'.",
        buggy_code: "const mesage = 'Hello';\nconsole.log(message);",
        correct_code: "const message = 'Hello';\nconsole.log(message);",
        hints: &[
            "Check the spelling carefully",
            "The variable name has a typo",
            "mesage should be message",
        ],
    },
    LevelDef {
        id: 8,
        title: "Assignment vs Equality",
        description: "This code uses assignment (=) instead of comparison (===) in the if condition. This always sets isReady to true and executes the block.",
        buggy_code: "if (isReady = true) {\n  launch();\n}",
        correct_code: "if (isReady === true) {\n  launch();\n}",
        hints: &[
            "Single = is assignment, not comparison",
            "Use === for strict equality comparison",
            "Change = to ===",
        ],
    },
    LevelDef {
        id: 9,
        title: "Missing Parentheses",
        description: "Function calls require parentheses. Without them, you're referencing the function, not calling it.",
        buggy_code: "const result = calculate;",
        correct_code: "const result = calculate();",
        hints: &[
            "You need to call the function",
            "Add parentheses to call the function",
            "Add () after function name",
        ],
    },
    LevelDef {
        id: 10,
        title: "Off-by-one Error",
        description: "This loop is supposed to sum all elements in an array, but it's missing the last element. The condition stops one element too early.",
        buggy_code: "for (let i = 0; i < arr.length - 1; i++) {\n  sum += arr[i];\n}",
        correct_code: "for (let i = 0; i < arr.length; i++) {\n  sum += arr[i];\n}",
        hints: &[
            "Look at the loop condition carefully",
            "The condition should be i < arr.length",
            "Remove the '- 1' from the condition",
        ],
    },
    LevelDef {
        id: 11,
        title: "Incorrect Method Call",
        description: "Arrays use push() to add elements, not add(). The add() method doesn't exist on arrays.",
        buggy_code: "arr.add(item);",
        correct_code: "arr.push(item);",
        hints: &[
            "Arrays don't have an add() method",
            "Use push() to add elements",
            "Change add to push",
        ],
    },
    LevelDef {
        id: 12,
        title: "Missing Curly Braces",
        description: "Multi-line blocks need curly braces. Without them, only the first line is part of the if statement.",
        buggy_code: "if (condition)\n  doThis();\n  doThat();",
        correct_code: "if (condition) {\n  doThis();\n  doThat();\n}",
        hints: &[
            "Add curly braces for multi-line blocks",
            "Wrap both statements in { }",
            "if (condition) { ... }",
        ],
    },
    LevelDef {
        id: 13,
        title: "Missing Comma in Object",
        description: "Object properties need commas between them. Without commas, you'll get a syntax error.",
        buggy_code: "const obj = {\n  name: 'John'\n  age: 30\n};",
        correct_code: "const obj = {\n  name: 'John',\n  age: 30\n};",
        hints: &[
            "Object properties need commas",
            "Add comma after first property",
            "name: 'John',",
        ],
    },
    LevelDef {
        id: 14,
        title: "Undefined Variable",
        description: "Using a variable before declaring it causes a ReferenceError. Always declare variables before use.",
        buggy_code: "console.log(message);",
        correct_code: "const message = 'Hello';\nconsole.log(message);",
        hints: &[
            "The variable needs to be declared first",
            "Add const message = 'Hello';",
            "Declare before using",
        ],
    },
    LevelDef {
        id: 15,
        title: "Null Reference Error",
        description: "Accessing properties on potentially null/undefined objects causes crashes. Use optional chaining (?.) to safely access nested properties.",
        buggy_code: "const len = user.name.length;",
        correct_code: "const len = user.name?.length ?? 0;",
        hints: &[
            "What if user or user.name is null?",
            "Use optional chaining operator ?.",
            "Add a fallback value with ??",
        ],
    },
    LevelDef {
        id: 16,
        title: "Array Mutation Bug",
        description: "The sort() method mutates the original array. To avoid side effects, create a copy first using the spread operator or slice().",
        buggy_code: "const sorted = arr.sort();",
        correct_code: "const sorted = [...arr].sort();",
        hints: &[
            "sort() modifies the original array",
            "Create a copy before sorting",
            "Use spread operator [...arr] to copy",
        ],
    },
    LevelDef {
        id: 17,
        title: "Closure Variable Bug",
        description: "Using var in a loop creates a single variable shared across all iterations. Use let to create a new variable for each iteration.",
        buggy_code: "for (var i = 0; i < 3; i++) {\n  setTimeout(() => console.log(i), 100);\n}",
        correct_code: "for (let i = 0; i < 3; i++) {\n  setTimeout(() => console.log(i), 100);\n}",
        hints: &[
            "var is function-scoped, not block-scoped",
            "Use let instead of var in loops",
            "Change var to let",
        ],
    },
    LevelDef {
        id: 18,
        title: "Missing Break in Switch",
        description: "Without break statements, switch cases fall through to the next case. Add break after each case to prevent unintended execution.",
        buggy_code: "switch (day) {\n  case 'Mon':\n    console.log('Monday');\n  case 'Tue':\n    console.log('Tuesday');\n}",
        correct_code: "switch (day) {\n  case 'Mon':\n    console.log('Monday');\n    break;\n  case 'Tue':\n    console.log('Tuesday');\n    break;\n}",
        hints: &[
            "Switch cases fall through without break",
            "Add break after each case",
            "break; after each console.log",
        ],
    },
    LevelDef {
        id: 19,
        title: "Infinite Loop Bug",
        description: "The loop counter never increments, causing an infinite loop. Always ensure loop variables are updated.",
        buggy_code: "for (let i = 0; i < 10;) {\n  console.log(i);\n}",
        correct_code: "for (let i = 0; i < 10; i++) {\n  console.log(i);\n}",
        hints: &[
            "The loop variable never changes",
            "Add i++ to increment the counter",
            "for (let i = 0; i < 10; i++)",
        ],
    },
    LevelDef {
        id: 20,
        title: "Complex Nested Callback Hell",
        description: "Deeply nested callbacks are hard to read and maintain. Use async/await or Promises to flatten the structure.",
        buggy_code: "getData(function(a) {\n  getMoreData(a, function(b) {\n    getMoreData(b, function(c) {\n      console.log(c);\n    });\n  });\n});",
        correct_code: "async function fetchData() {\n  const a = await getData();\n  const b = await getMoreData(a);\n  const c = await getMoreData(b);\n  console.log(c);\n}",
        hints: &[
            "Nested callbacks create 'callback hell'",
            "Use async/await to flatten the code",
            "Convert to async function with await",
        ],
    },
];
